//! # Threshold Configuration
//!
//! Named warning/critical bounds per queue, with built-in defaults used
//! whenever configuration is absent or has no entry for an entity. A
//! missing or empty configuration is an expected state, never an error.
//!
//! Threshold files can be loaded with [`MonitoringThresholds::from_file`];
//! pairs accept either the named form `{ warning = 10, critical = 20 }`
//! or the positional two-element list `[10, 20]` used by the Ruby-side
//! configuration.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::MonitoringError;

/// Warning/critical bounds for one metric.
///
/// `warning <= critical` is the caller-owned convention: classification
/// behaves correctly only under it, but pairs are never validated or
/// reordered here. A configured pair is used verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdPair<T> {
    pub warning: T,
    pub critical: T,
}

impl<T> ThresholdPair<T> {
    pub const fn new(warning: T, critical: T) -> Self {
        Self { warning, critical }
    }
}

/// Accept both `{ warning, critical }` and the positional `[w, c]` form
/// for compatibility with array-style threshold files.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for ThresholdPair<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Named { warning: T, critical: T },
            Positional(T, T),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Named { warning, critical } | Repr::Positional(warning, critical) => {
                Ok(ThresholdPair { warning, critical })
            }
        }
    }
}

/// Queue-name → threshold-pair mapping for one metric.
pub type ThresholdMap<T> = HashMap<String, ThresholdPair<T>>;

/// Default queue backlog bounds: warn at 1 000 pending jobs, critical at 2 000.
pub const DEFAULT_QUEUE_SIZE: ThresholdPair<u64> = ThresholdPair::new(1_000, 2_000);

/// Default queue latency bounds in seconds.
pub const DEFAULT_LATENCY: ThresholdPair<f64> = ThresholdPair::new(300.0, 900.0);

/// Default per-job elapsed-time bounds in seconds.
pub const DEFAULT_ELAPSED: ThresholdPair<f64> = ThresholdPair::new(60.0, 120.0);

/// Look up the pair configured for `name`, falling back to `default`.
///
/// Absent configuration and missing entries both resolve to the default
/// silently; only the lookup fails open, configured values propagate
/// verbatim. Infallible by contract.
pub fn resolve<T: Copy>(
    map: Option<&ThresholdMap<T>>,
    name: &str,
    default: ThresholdPair<T>,
) -> ThresholdPair<T> {
    map.and_then(|m| m.get(name)).copied().unwrap_or(default)
}

/// The three independent threshold tables consulted during aggregation.
///
/// Constructed by the host application and passed by reference into every
/// aggregation call; there is no process-wide mutable state in the core.
/// The web layer keeps the current value behind a lock so hosts can swap
/// it between requests (see [`crate::web::state::AppState`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringThresholds {
    /// Queue backlog size bounds, keyed by queue name.
    #[serde(default)]
    pub queue_size: Option<ThresholdMap<u64>>,
    /// Queue latency bounds in seconds, keyed by queue name.
    #[serde(default)]
    pub latency: Option<ThresholdMap<f64>>,
    /// In-flight job elapsed-time bounds in seconds, keyed by the job's queue name.
    #[serde(default)]
    pub elapsed: Option<ThresholdMap<f64>>,
}

impl MonitoringThresholds {
    /// Size bounds for `queue_name`, or [`DEFAULT_QUEUE_SIZE`].
    pub fn queue_size_for(&self, queue_name: &str) -> ThresholdPair<u64> {
        resolve(self.queue_size.as_ref(), queue_name, DEFAULT_QUEUE_SIZE)
    }

    /// Latency bounds for `queue_name`, or [`DEFAULT_LATENCY`].
    pub fn latency_for(&self, queue_name: &str) -> ThresholdPair<f64> {
        resolve(self.latency.as_ref(), queue_name, DEFAULT_LATENCY)
    }

    /// Elapsed-time bounds for jobs from `queue_name`, or [`DEFAULT_ELAPSED`].
    pub fn elapsed_for(&self, queue_name: &str) -> ThresholdPair<f64> {
        resolve(self.elapsed.as_ref(), queue_name, DEFAULT_ELAPSED)
    }

    /// Load threshold tables from a configuration file (YAML, TOML or JSON).
    ///
    /// Sections may be omitted; anything missing resolves to defaults at
    /// lookup time.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MonitoringError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
