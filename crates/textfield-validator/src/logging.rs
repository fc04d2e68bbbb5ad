//! Logging setup for hosts and demos
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the host. This helper covers the common case.

use std::io;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (e.g. "textfield_validator=debug")
    pub filter: String,
    /// Emit JSON lines instead of plain text
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Verbose text output for local development
    pub fn development() -> Self {
        Self {
            filter: "textfield_validator=trace,info".to_string(),
            json_format: false,
        }
    }

    /// Replace the fallback filter
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over [`LoggingConfig::filter`]. Fails if the
/// filter does not parse or a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.filter))?;

    if config.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(Layer::new().with_writer(io::stdout).json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(Layer::new().with_writer(io::stdout))
            .try_init()?;
    }

    tracing::debug!(filter = %config.filter, json = config.json_format, "logging initialized");
    Ok(())
}
