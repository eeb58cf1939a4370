//! Engine error types

use etpgrf_core::ConfigError;
use thiserror::Error;

/// Errors raised while assembling a typographer
///
/// Processing itself never fails; every error surfaces at construction.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid language, mode or rule parameter
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rule combination that cannot work together
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
