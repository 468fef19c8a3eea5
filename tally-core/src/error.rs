//! Error types for configuration
//!
//! Segmentation and counting never fail; only building a [`Config`] does.
//!
//! [`Config`]: crate::Config

use thiserror::Error;

/// Error type for tally-core operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown rule set name
    #[error("Invalid rule set: {0} (expected \"full\" or \"basic\")")]
    InvalidRuleSet(String),
}

/// Result type for tally-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let error = Error::Configuration("words_per_minute must be greater than 0".into());
        assert_eq!(
            error.to_string(),
            "Configuration error: words_per_minute must be greater than 0"
        );
    }

    #[test]
    fn test_invalid_rule_set_display() {
        let error = Error::InvalidRuleSet("strict".into());
        assert!(error.to_string().starts_with("Invalid rule set: strict"));
    }
}
