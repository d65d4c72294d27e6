//! Error types for readability-scores-core.
//!
//! Scoring itself never fails (see [`crate::readability_scores`]); the only
//! fallible operation in the library is configuration loading.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(ConfigError::NotFound.to_string(), "no configuration file found");
        let figment_error = figment::Error::from("bad value".to_string());
        let err = ConfigError::from(Box::new(figment_error));
        assert!(err.to_string().starts_with("invalid configuration: "));
    }
}
