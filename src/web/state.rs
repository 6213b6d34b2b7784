//! # Shared Application State
//!
//! The snapshot source and the current threshold tables, shared across
//! requests. Thresholds sit behind a lock so the host can hot-swap them
//! between requests; every request reads them fresh and no classification
//! result is ever cached across calls.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::source::SnapshotSource;
use crate::thresholds::MonitoringThresholds;

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn SnapshotSource>,
    thresholds: Arc<RwLock<MonitoringThresholds>>,
}

impl AppState {
    pub fn new(source: Arc<dyn SnapshotSource>, thresholds: MonitoringThresholds) -> Self {
        Self {
            source,
            thresholds: Arc::new(RwLock::new(thresholds)),
        }
    }

    pub fn source(&self) -> &dyn SnapshotSource {
        self.source.as_ref()
    }

    /// A copy of the current threshold tables.
    ///
    /// Cloned under the read lock so the guard never crosses an await.
    pub fn thresholds(&self) -> MonitoringThresholds {
        self.thresholds.read().clone()
    }

    /// Replace the threshold tables; takes effect on the next request.
    pub fn set_thresholds(&self, thresholds: MonitoringThresholds) {
        *self.thresholds.write() = thresholds;
    }
}
