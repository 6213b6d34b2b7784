//! # HTTP Surface
//!
//! One read-only endpoint exposing the aggregated health report as
//! JSON, for consumption by an external monitoring probe:
//!
//! - `GET /sidekiq_queues` — always `200 OK` with the report body;
//!   only a snapshot-source failure produces a 5xx.

pub mod errors;
pub mod handlers;
pub mod state;

use axum::routing::get;
use axum::Router;

pub use state::AppState;

/// Build the monitoring router. Hosts can merge it into a larger app.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sidekiq_queues", get(handlers::queues::sidekiq_queues))
        .with_state(state)
}
