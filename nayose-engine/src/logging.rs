//! Logging setup for hosts that do not install their own subscriber.

use std::sync::Once;

use crate::config::Settings;

static INIT_LOGGING: Once = Once::new();

/// Install a stderr fmt subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Only the first call has an effect.
pub fn init_logging(default_filter: &str) {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
            )
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// [`init_logging`] with the filter from the settings.
pub fn init_from_settings(settings: &Settings) {
    init_logging(&settings.logging.filter);
}
