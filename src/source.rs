//! # Snapshot Source Contract
//!
//! The queue backend is an external collaborator. It supplies one
//! immutable [`ClusterSnapshot`] per aggregation request; everything
//! downstream of that snapshot is a pure, non-suspending computation.
//!
//! Fetch failures (unreachable backend, malformed payload) surface to
//! the transport layer as 5xx responses — the core never absorbs them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One queue's live backlog metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub name: String,
    /// Number of pending jobs.
    pub size: u64,
    /// Age of the oldest pending job, in seconds.
    pub latency: f64,
}

/// One currently-executing job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerSnapshot {
    pub process_id: String,
    /// Sidekiq job identifier.
    pub jid: String,
    /// Queue the job was pulled from.
    pub queue: String,
    /// Job class name.
    pub worker_class: String,
    /// Unix timestamp (seconds) at which the job started running.
    pub run_at: i64,
}

/// Everything the backend reports at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    pub queues: Vec<QueueSnapshot>,
    pub workers: Vec<WorkerSnapshot>,
}

/// Failures at the queue-backend boundary.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("queue backend unreachable: {0}")]
    Unavailable(String),

    #[error("malformed snapshot from queue backend: {0}")]
    Malformed(String),
}

/// Supplier of cluster snapshots, implemented by the host application
/// against its concrete backend (Redis, test fixtures, ...).
///
/// Fetching may await or block; the classification core never does.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn snapshot(&self) -> Result<ClusterSnapshot, SourceError>;
}

/// A fixed snapshot is its own source. Useful for tests and demos.
#[async_trait]
impl SnapshotSource for ClusterSnapshot {
    async fn snapshot(&self) -> Result<ClusterSnapshot, SourceError> {
        Ok(self.clone())
    }
}
