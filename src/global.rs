//! # Global Aggregation
//!
//! Turns one cluster snapshot into a [`GlobalReport`]: resolves
//! thresholds per entity, classifies every queue and in-flight job,
//! drops empty queues from view, sorts worst-first and merges the two
//! verdicts into a single global status.
//!
//! The whole computation is pure and re-entrant: every call builds its
//! own entities from the snapshot it was given, reads the threshold
//! tables it was handed and shares nothing with concurrent calls.

use chrono::Utc;
use serde::Serialize;

use crate::queue::Queue;
use crate::source::{QueueSnapshot, WorkerSnapshot};
use crate::status::{sort_by_criticality, Monitorable, Status};
use crate::thresholds::MonitoringThresholds;
use crate::worker::Worker;

/// The aggregate verdict plus every visible entity, worst-first.
///
/// Built once per request, immutable afterwards, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct GlobalReport {
    pub global_status: Status,
    /// Queues with pending jobs, sorted by descending criticality.
    /// Empty queues are invisible: excluded here and from the verdict.
    pub queues: Vec<Queue>,
    /// Every in-flight job, sorted by descending criticality.
    pub workers: Vec<Worker>,
}

impl GlobalReport {
    /// Worst status among visible queues, or `Unknown` when none.
    pub fn queue_status(&self) -> Status {
        worst_status(&self.queues)
    }

    /// Worst status among workers, or `Unknown` when none.
    pub fn worker_status(&self) -> Status {
        worst_status(&self.workers)
    }
}

/// Classify a snapshot against the current wall clock.
pub fn aggregate(
    queues: Vec<QueueSnapshot>,
    workers: Vec<WorkerSnapshot>,
    thresholds: &MonitoringThresholds,
) -> GlobalReport {
    aggregate_at(Utc::now().timestamp(), queues, workers, thresholds)
}

/// Classify a snapshot against an explicit `now`.
///
/// All workers in the batch share this clock, so elapsed times within
/// one report are mutually consistent.
pub fn aggregate_at(
    now: i64,
    queues: Vec<QueueSnapshot>,
    workers: Vec<WorkerSnapshot>,
    thresholds: &MonitoringThresholds,
) -> GlobalReport {
    let mut queues: Vec<Queue> = queues
        .into_iter()
        .filter(|snapshot| snapshot.size > 0)
        .map(|snapshot| {
            let size_pair = thresholds.queue_size_for(&snapshot.name);
            let latency_pair = thresholds.latency_for(&snapshot.name);
            Queue::new(snapshot.name, snapshot.size, snapshot.latency, size_pair, latency_pair)
        })
        .collect();

    let mut workers: Vec<Worker> = workers
        .into_iter()
        .map(|snapshot| {
            let elapsed_pair = thresholds.elapsed_for(&snapshot.queue);
            Worker::new_at(
                now,
                snapshot.process_id,
                snapshot.jid,
                snapshot.queue,
                snapshot.worker_class,
                snapshot.run_at,
                elapsed_pair,
            )
        })
        .collect();

    sort_by_criticality(&mut queues);
    sort_by_criticality(&mut workers);

    let queue_status = worst_status(&queues);
    let worker_status = worst_status(&workers);

    GlobalReport {
        global_status: merge_statuses(queue_status, worker_status),
        queues,
        workers,
    }
}

/// After a worst-first sort the front entity carries the worst status.
fn worst_status<M: Monitorable>(entities: &[M]) -> Status {
    entities.first().map(Monitorable::status).unwrap_or(Status::Unknown)
}

/// Workers escalate the verdict only when strictly worse than the queue
/// verdict; the queue status wins every tie, including both-UNKNOWN.
fn merge_statuses(queue_status: Status, worker_status: Status) -> Status {
    if worker_status != Status::Unknown && worker_status > queue_status {
        worker_status
    } else {
        queue_status
    }
}
