//! # Worker Health Snapshot
//!
//! One currently-executing job with its elapsed processing time,
//! resolved elapsed-time thresholds and derived status. Elapsed time is
//! computed exactly once, at construction, so every read within one
//! report sees the same value.

use chrono::Utc;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::status::{Monitorable, Status};
use crate::thresholds::ThresholdPair;

/// Health snapshot of one in-flight job.
#[derive(Debug, Clone, PartialEq)]
pub struct Worker {
    process_id: String,
    jid: String,
    queue: String,
    worker_class: String,
    started_at: i64,
    elapsed_time: f64,
    elapsed_thresholds: ThresholdPair<f64>,
    status: Status,
}

impl Worker {
    /// Build a worker entity against the current wall clock.
    pub fn new(
        process_id: impl Into<String>,
        jid: impl Into<String>,
        queue: impl Into<String>,
        worker_class: impl Into<String>,
        started_at: i64,
        elapsed_thresholds: ThresholdPair<f64>,
    ) -> Self {
        Self::new_at(
            Utc::now().timestamp(),
            process_id,
            jid,
            queue,
            worker_class,
            started_at,
            elapsed_thresholds,
        )
    }

    /// Build a worker entity against an explicit `now`.
    ///
    /// The aggregator passes one `now` for the whole batch so all workers
    /// in a report share a consistent clock; tests pass a fixed one.
    pub fn new_at(
        now: i64,
        process_id: impl Into<String>,
        jid: impl Into<String>,
        queue: impl Into<String>,
        worker_class: impl Into<String>,
        started_at: i64,
        elapsed_thresholds: ThresholdPair<f64>,
    ) -> Self {
        let elapsed_time = (now - started_at) as f64;
        let status = Status::classify_one(elapsed_time, &elapsed_thresholds);

        Self {
            process_id: process_id.into(),
            jid: jid.into(),
            queue: queue.into(),
            worker_class: worker_class.into(),
            started_at,
            elapsed_time,
            elapsed_thresholds,
            status,
        }
    }

    pub fn process_id(&self) -> &str {
        &self.process_id
    }

    pub fn jid(&self) -> &str {
        &self.jid
    }

    pub fn queue(&self) -> &str {
        &self.queue
    }

    pub fn worker_class(&self) -> &str {
        &self.worker_class
    }

    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    /// Seconds this job has been running, frozen at construction.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn elapsed_thresholds(&self) -> ThresholdPair<f64> {
        self.elapsed_thresholds
    }

    /// The status cached at construction.
    pub fn status(&self) -> Status {
        self.status
    }
}

impl Monitorable for Worker {
    fn status(&self) -> Status {
        self.status
    }
}

impl Serialize for Worker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Worker", 8)?;
        record.serialize_field("queue", &self.queue)?;
        record.serialize_field("jid", &self.jid)?;
        record.serialize_field("process_id", &self.process_id)?;
        record.serialize_field("worker_class", &self.worker_class)?;
        record.serialize_field("status", &self.status)?;
        record.serialize_field("elapsed_time", &self.elapsed_time)?;
        record.serialize_field("elapsed_warning_threshold", &self.elapsed_thresholds.warning)?;
        record.serialize_field("elapsed_critical_threshold", &self.elapsed_thresholds.critical)?;
        record.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::DEFAULT_ELAPSED;

    const START: i64 = 1_531_207_721;

    fn worker_running_for(elapsed: i64, thresholds: ThresholdPair<f64>) -> Worker {
        Worker::new_at(
            START + elapsed,
            "1234",
            "JID-123456",
            "low",
            "TestWorker",
            START,
            thresholds,
        )
    }

    #[test]
    fn elapsed_time_drives_status() {
        let pair = ThresholdPair::new(200.0, 500.0);

        assert_eq!(worker_running_for(10, pair).status(), Status::Ok);
        assert_eq!(worker_running_for(250, pair).status(), Status::Warning);
        assert_eq!(worker_running_for(1_200, pair).status(), Status::Critical);
    }

    #[test]
    fn boundaries_are_inclusive() {
        let pair = ThresholdPair::new(200.0, 500.0);

        assert_eq!(worker_running_for(199, pair).status(), Status::Ok);
        assert_eq!(worker_running_for(200, pair).status(), Status::Warning);
        assert_eq!(worker_running_for(500, pair).status(), Status::Critical);
    }

    #[test]
    fn default_elapsed_thresholds_warn_at_sixty_seconds() {
        assert_eq!(worker_running_for(59, DEFAULT_ELAPSED).status(), Status::Ok);
        assert_eq!(worker_running_for(60, DEFAULT_ELAPSED).status(), Status::Warning);
        assert_eq!(worker_running_for(120, DEFAULT_ELAPSED).status(), Status::Critical);
    }

    #[test]
    fn elapsed_time_is_frozen_at_construction() {
        let worker = worker_running_for(250, ThresholdPair::new(200.0, 500.0));
        assert_eq!(worker.elapsed_time(), 250.0);
        assert_eq!(worker.started_at(), START);
    }

    #[test]
    fn serializes_all_report_fields() {
        let worker = worker_running_for(250, ThresholdPair::new(200.0, 500.0));
        let json = serde_json::to_value(&worker).unwrap();

        assert_eq!(json["queue"], "low");
        assert_eq!(json["jid"], "JID-123456");
        assert_eq!(json["process_id"], "1234");
        assert_eq!(json["worker_class"], "TestWorker");
        assert_eq!(json["status"], "WARNING");
        assert_eq!(json["elapsed_time"], 250.0);
        assert_eq!(json["elapsed_warning_threshold"], 200.0);
        assert_eq!(json["elapsed_critical_threshold"], 500.0);
    }
}
