//! Tracing subscriber setup for binaries embedding the use cases

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogFormat};
use crate::error::ConfigError;

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &Config) -> Result<(), ConfigError> {
    let filter = build_filter(&config.log_filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Pretty => registry.with(fmt::layer()).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };
    result.map_err(|e| ConfigError::Telemetry(e.to_string()))
}

fn build_filter(directives: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(directives).map_err(|e| ConfigError::Invalid {
        key: "RUST_LOG",
        message: e.to_string(),
    })
}
