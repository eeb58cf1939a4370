//! Configuration errors
//!
//! Text processing itself is total: every operation returns its input
//! unchanged when it cannot transform it. Errors only arise while a
//! processor is being configured.

use thiserror::Error;

/// Errors raised while validating typographer configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The language selection was empty after parsing
    #[error("language selection is empty; supported languages: {supported}")]
    EmptyLanguages {
        /// Comma-separated list of supported codes
        supported: String,
    },

    /// A language code is not supported
    #[error("language '{code}' is not supported; supported languages: {supported}")]
    UnsupportedLanguage {
        /// The rejected code
        code: String,
        /// Comma-separated list of supported codes
        supported: String,
    },

    /// An output mode name is not supported
    #[error("mode '{mode}' is not supported; supported modes: {supported}")]
    UnsupportedMode {
        /// The rejected mode name
        mode: String,
        /// Comma-separated list of supported modes
        supported: String,
    },

    /// A numeric or textual parameter is out of range
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A language profile could not be loaded
    #[error("language profile '{code}' is invalid: {reason}")]
    Profile {
        /// Profile language code
        code: String,
        /// Parse or validation failure
        reason: String,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_lists_supported_set() {
        let error = ConfigError::UnsupportedLanguage {
            code: "de".to_string(),
            supported: "ru, ruold, en".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "language 'de' is not supported; supported languages: ru, ruold, en"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = ConfigError::InvalidParameter {
            name: "min_tail_len",
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid parameter 'min_tail_len': must be at least 1"
        );
    }
}
