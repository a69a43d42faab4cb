//! Tracing/logging setup shared by binaries.

/// Logging configuration (filter directives, output format).
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide logging from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> Result<(), ConfigError> {
    let config = ObservabilityConfig::from_env()?;
    tracing::init_with(&config);
    Ok(())
}
