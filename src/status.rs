//! # Health Status Classification
//!
//! Ordinal status model shared by every monitored entity, plus the
//! threshold comparison that derives a status from a live metric value.
//!
//! Threshold comparison is inclusive: a value exactly equal to a bound
//! takes that bound's status. A queue sitting precisely at its critical
//! threshold is CRITICAL, not WARNING.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::thresholds::ThresholdPair;

/// Ordinal health classification: OK < WARNING < CRITICAL < UNKNOWN.
///
/// `Unknown` never results from a threshold comparison; it only arises
/// from absence of data (no queues, no workers) and acts as the identity
/// element when combining an empty set of statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Classify one metric value against its threshold pair.
    ///
    /// Comparisons are inclusive (`>=`) on both bounds. The pair is taken
    /// verbatim; a pair with `warning > critical` produces a deterministic
    /// but caller-owned outcome (see [`ThresholdPair`]).
    pub fn classify_one<T: PartialOrd>(value: T, thresholds: &ThresholdPair<T>) -> Status {
        if value >= thresholds.critical {
            Status::Critical
        } else if value >= thresholds.warning {
            Status::Warning
        } else {
            Status::Ok
        }
    }

    /// Combine per-metric statuses by taking the worst (highest ordinal).
    ///
    /// Any single CRITICAL check makes the whole entity CRITICAL. An empty
    /// sequence yields `Unknown`.
    pub fn worst_of<I>(checks: I) -> Status
    where
        I: IntoIterator<Item = Status>,
    {
        checks.into_iter().max().unwrap_or(Status::Unknown)
    }

    /// Severity ranking used to sort report entries worst-first.
    ///
    /// Differs from the ordinal in exactly one place: `Unknown` ranks
    /// below `Ok`, so entities without data sink to the bottom of a
    /// report instead of masquerading as the most urgent entries.
    pub fn criticality(self) -> u8 {
        match self {
            Status::Critical => 3,
            Status::Warning => 2,
            Status::Ok => 1,
            Status::Unknown => 0,
        }
    }

    /// The wire representation used in JSON reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common capability of every monitored entity: a status cached at
/// construction and a severity ranking derived from it.
///
/// Implemented independently by [`crate::queue::Queue`] and
/// [`crate::worker::Worker`]; sorting and aggregation only ever read the
/// cached status, never re-evaluate metrics.
pub trait Monitorable {
    /// The status derived when the entity was constructed.
    fn status(&self) -> Status;

    /// Severity ranking for worst-first ordering.
    fn criticality(&self) -> u8 {
        self.status().criticality()
    }
}

/// Stable worst-first sort over any monitorable entities.
///
/// Entities with equal status keep their relative input order.
pub fn sort_by_criticality<M: Monitorable>(entities: &mut [M]) {
    entities.sort_by(|a, b| b.criticality().cmp(&a.criticality()));
}
