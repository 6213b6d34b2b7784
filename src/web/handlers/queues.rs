//! # Queue Health Handler
//!
//! `GET /sidekiq_queues`: fetch one snapshot from the backend, read the
//! current thresholds, aggregate, respond with the JSON report.

use axum::extract::State;
use axum::Json;
use tracing::{debug, error};

use crate::global::{aggregate, GlobalReport};
use crate::web::errors::ApiError;
use crate::web::state::AppState;

/// Aggregated cluster health endpoint: GET /sidekiq_queues
///
/// Responds `200 OK` with the report for every reachable-backend state,
/// including an empty cluster (global status UNKNOWN). Backend failures
/// surface as 5xx, never as a degraded report.
pub async fn sidekiq_queues(State(state): State<AppState>) -> Result<Json<GlobalReport>, ApiError> {
    debug!("building queue health report");

    let snapshot = state.source().snapshot().await.map_err(|e| {
        error!(error = %e, "failed to fetch cluster snapshot");
        ApiError::from(e)
    })?;

    // Thresholds are re-read on every request so host hot-swaps apply
    // without a restart.
    let thresholds = state.thresholds();
    let report = aggregate(snapshot.queues, snapshot.workers, &thresholds);

    debug!(
        global_status = %report.global_status,
        queues = report.queues.len(),
        workers = report.workers.len(),
        "queue health report built"
    );

    Ok(Json(report))
}
