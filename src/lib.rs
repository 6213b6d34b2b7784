#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Sidekiq Monitoring
//!
//! Threshold-based health classification for Sidekiq-style job queue
//! clusters, exposed as a single JSON endpoint for an external
//! monitoring probe (Nagios, Icinga, ...).
//!
//! ## Overview
//!
//! Live metrics — queue backlog size, queue latency and per-job elapsed
//! processing time — are compared against configurable warning/critical
//! thresholds. Each queue and each in-flight job gets an ordinal status
//! (OK < WARNING < CRITICAL < UNKNOWN); the per-entity statuses merge
//! into one global verdict, with workers able to escalate but never
//! de-escalate the queue-derived result.
//!
//! ## Module Organization
//!
//! - [`status`] - Ordinal status model and threshold classification
//! - [`thresholds`] - Named threshold tables with default fallback
//! - [`queue`] / [`worker`] - Immutable per-entity health snapshots
//! - [`global`] - Aggregation into one report and global status
//! - [`source`] - Snapshot contract for the queue backend collaborator
//! - [`web`] - axum router serving `GET /sidekiq_queues`
//! - [`error`] - Error taxonomy for the collaborator boundaries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sidekiq_monitoring::source::ClusterSnapshot;
//! use sidekiq_monitoring::thresholds::MonitoringThresholds;
//! use sidekiq_monitoring::web::{router, AppState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let thresholds = MonitoringThresholds::from_file("thresholds.yaml")?;
//! let source = Arc::new(ClusterSnapshot::default()); // your backend here
//! let app = router(AppState::new(source, thresholds));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod global;
pub mod logging;
pub mod queue;
pub mod source;
pub mod status;
pub mod thresholds;
pub mod web;
pub mod worker;

pub use error::{MonitoringError, Result};
pub use global::{aggregate, aggregate_at, GlobalReport};
pub use queue::Queue;
pub use source::{ClusterSnapshot, QueueSnapshot, SnapshotSource, SourceError, WorkerSnapshot};
pub use status::{Monitorable, Status};
pub use thresholds::{MonitoringThresholds, ThresholdMap, ThresholdPair};
pub use worker::Worker;
