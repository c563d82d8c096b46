//! Configuration error types
//!
//! A single error enum covers everything that can go wrong while assembling
//! a theme configuration. None of these are recoverable: a malformed
//! configuration must abort application startup.

use serde::Serialize;
use thiserror::Error;

/// Error raised while building or loading a theme configuration
///
/// Serializable so a hosting shell can forward it to the frontend as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum ConfigurationError {
    /// The breakpoint table lacks a required size key
    #[error("Missing breakpoint: {0}")]
    MissingBreakpoint(String),

    /// A field was given a value outside its declared set
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },

    /// The icon set lacks a role the layout engine expects
    #[error("Missing icon for role: {0}")]
    MissingIcon(String),

    /// An icon role is mapped to an empty identifier
    #[error("Empty icon identifier for role: {0}")]
    EmptyIcon(String),

    /// The logo markup fragment is empty
    #[error("Logo markup is empty")]
    EmptyLogo,

    /// The process-wide configuration was already installed
    #[error("Theme configuration is already initialized")]
    AlreadyInitialized,

    /// IO error while reading an overrides or asset file
    #[error("IO error: {0}")]
    IoError(String),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ConfigurationError {
    /// Shorthand for [`ConfigurationError::InvalidValue`]
    pub fn invalid(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl From<ConfigurationError> for String {
    fn from(error: ConfigurationError) -> String {
        error.to_string()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ConfigurationError>;

impl From<std::io::Error> for ConfigurationError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConfigurationError::MissingBreakpoint("md".to_string());
        assert_eq!(err.to_string(), "Missing breakpoint: md");

        let err = ConfigurationError::invalid("navbar.type", "floating");
        assert_eq!(err.to_string(), "Invalid value for navbar.type: \"floating\"");
    }

    #[test]
    fn test_serialization_is_tagged() {
        let err = ConfigurationError::MissingIcon("close".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "MissingIcon");
        assert_eq!(json["message"], "close");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ConfigurationError = io.into();
        assert!(matches!(err, ConfigurationError::IoError(_)));
    }
}
