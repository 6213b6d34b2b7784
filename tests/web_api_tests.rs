//! # Web API Endpoint Tests
//!
//! Exercise the `/sidekiq_queues` handler end to end against fixed
//! snapshot sources: report content, error mapping and threshold
//! hot-swapping between requests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use sidekiq_monitoring::source::{
    ClusterSnapshot, QueueSnapshot, SnapshotSource, SourceError, WorkerSnapshot,
};
use sidekiq_monitoring::thresholds::{MonitoringThresholds, ThresholdMap, ThresholdPair};
use sidekiq_monitoring::web::handlers::queues::sidekiq_queues;
use sidekiq_monitoring::web::{router, AppState};
use sidekiq_monitoring::Status;

/// Source double that always fails, standing in for an unreachable backend.
struct DeadBackend;

#[async_trait]
impl SnapshotSource for DeadBackend {
    async fn snapshot(&self) -> Result<ClusterSnapshot, SourceError> {
        Err(SourceError::Unavailable("connection refused".to_string()))
    }
}

fn busy_cluster() -> ClusterSnapshot {
    ClusterSnapshot {
        queues: vec![
            QueueSnapshot { name: "default".to_string(), size: 1_500, latency: 10.0 },
            QueueSnapshot { name: "mailers".to_string(), size: 3, latency: 1.0 },
            QueueSnapshot { name: "idle".to_string(), size: 0, latency: 0.0 },
        ],
        workers: vec![WorkerSnapshot {
            process_id: "host:17".to_string(),
            jid: "JID-abc".to_string(),
            queue: "default".to_string(),
            worker_class: "HardWorker".to_string(),
            run_at: chrono::Utc::now().timestamp() - 5,
        }],
    }
}

#[tokio::test]
async fn reports_cluster_health_with_defaults() {
    let state = AppState::new(Arc::new(busy_cluster()), MonitoringThresholds::default());

    let report = sidekiq_queues(State(state)).await.expect("handler should succeed").0;

    // "idle" is empty and invisible; "default" warns on size under the
    // default [1000, 2000] bounds.
    assert_eq!(report.queues.len(), 2);
    assert_eq!(report.queues[0].name(), "default");
    assert_eq!(report.queues[0].status(), Status::Warning);
    assert_eq!(report.workers.len(), 1);
    assert_eq!(report.global_status, Status::Warning);
}

#[tokio::test]
async fn thresholds_can_be_swapped_between_requests() {
    let state = AppState::new(Arc::new(busy_cluster()), MonitoringThresholds::default());

    let first = sidekiq_queues(State(state.clone())).await.expect("handler should succeed").0;
    assert_eq!(first.global_status, Status::Warning);

    // Raise the bounds for "default"; the very next request sees them.
    let mut queue_size = ThresholdMap::new();
    queue_size.insert("default".to_string(), ThresholdPair::new(10_000u64, 20_000));
    state.set_thresholds(MonitoringThresholds { queue_size: Some(queue_size), ..Default::default() });

    let second = sidekiq_queues(State(state)).await.expect("handler should succeed").0;
    assert_eq!(second.global_status, Status::Ok);
}

#[tokio::test]
async fn empty_cluster_is_unknown_not_an_error() {
    let state = AppState::new(Arc::new(ClusterSnapshot::default()), MonitoringThresholds::default());

    let report = sidekiq_queues(State(state)).await.expect("handler should succeed").0;

    assert_eq!(report.global_status, Status::Unknown);
    assert!(report.queues.is_empty());
    assert!(report.workers.is_empty());
}

#[tokio::test]
async fn unreachable_backend_surfaces_as_service_unavailable() {
    let state = AppState::new(Arc::new(DeadBackend), MonitoringThresholds::default());

    let error = sidekiq_queues(State(state)).await.expect_err("handler should fail");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn router_builds_with_shared_state() {
    let state = AppState::new(Arc::new(ClusterSnapshot::default()), MonitoringThresholds::default());
    let _app = router(state);
}
