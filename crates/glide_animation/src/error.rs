//! Animation configuration errors

use thiserror::Error;

/// Errors raised when validating a timeline configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Progress divides elapsed time by the duration, so zero is unusable.
    #[error("timeline duration must be at least 1ms")]
    ZeroDuration,
}

/// Result type for configuration validation.
pub type Result<T> = std::result::Result<T, ConfigError>;
