//! # Logging Setup
//!
//! Optional tracing-subscriber initialization for hosts that don't
//! bring their own subscriber. Honors `RUST_LOG`, defaults to `info`.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize a global tracing subscriber once per process.
///
/// Does nothing if a subscriber is already installed, so embedding
/// applications keep control of their own logging.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_filter(filter))
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialization_is_idempotent() {
        init_logging();
        init_logging();
    }
}
