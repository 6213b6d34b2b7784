//! # Error Types
//!
//! The classification core itself has no failure paths: absent
//! configuration falls back to defaults and empty inputs are valid
//! states. Errors only arise at the collaborator boundaries — fetching
//! a snapshot from the queue backend and loading threshold files.

use thiserror::Error;

pub use crate::source::SourceError;

/// Top-level error for the monitoring crate.
#[derive(Debug, Error)]
pub enum MonitoringError {
    #[error("snapshot source error: {0}")]
    Source(#[from] SourceError),

    #[error("threshold configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, MonitoringError>;
