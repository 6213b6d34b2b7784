//! # Queue Health Snapshot
//!
//! One monitored queue with its backlog size, latency, resolved
//! thresholds and the status derived from them. Entities are built
//! fresh on every aggregation request and never mutated afterwards;
//! the status is classified once at construction and cached.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::status::{Monitorable, Status};
use crate::thresholds::ThresholdPair;

/// Health snapshot of one queue.
///
/// Status combines two inclusive threshold checks — backlog size and
/// latency — taking the worst of the two.
#[derive(Debug, Clone, PartialEq)]
pub struct Queue {
    name: String,
    size: u64,
    latency: f64,
    size_thresholds: ThresholdPair<u64>,
    latency_thresholds: ThresholdPair<f64>,
    status: Status,
}

impl Queue {
    /// Build a queue entity and classify it immediately.
    ///
    /// Both threshold pairs must already be resolved (configuration
    /// lookup with default fallback happens in the aggregator).
    pub fn new(
        name: impl Into<String>,
        size: u64,
        latency: f64,
        size_thresholds: ThresholdPair<u64>,
        latency_thresholds: ThresholdPair<f64>,
    ) -> Self {
        let status = Status::worst_of([
            Status::classify_one(size, &size_thresholds),
            Status::classify_one(latency, &latency_thresholds),
        ]);

        Self {
            name: name.into(),
            size,
            latency,
            size_thresholds,
            latency_thresholds,
            status,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn latency(&self) -> f64 {
        self.latency
    }

    pub fn size_thresholds(&self) -> ThresholdPair<u64> {
        self.size_thresholds
    }

    pub fn latency_thresholds(&self) -> ThresholdPair<f64> {
        self.latency_thresholds
    }

    /// The status cached at construction.
    pub fn status(&self) -> Status {
        self.status
    }
}

impl Monitorable for Queue {
    fn status(&self) -> Status {
        self.status
    }
}

impl Serialize for Queue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Queue", 8)?;
        record.serialize_field("name", &self.name)?;
        record.serialize_field("size", &self.size)?;
        record.serialize_field("status", &self.status)?;
        record.serialize_field("queue_size_warning_threshold", &self.size_thresholds.warning)?;
        record.serialize_field("queue_size_critical_threshold", &self.size_thresholds.critical)?;
        record.serialize_field("latency", &self.latency)?;
        record.serialize_field("latency_warning_threshold", &self.latency_thresholds.warning)?;
        record.serialize_field("latency_critical_threshold", &self.latency_thresholds.critical)?;
        record.end()
    }
}
