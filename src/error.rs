//! Error types for vcard2fritz.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while writing phonebook XML.
#[derive(Error, Debug)]
pub enum XmlError {
    /// The XML serializer failed
    #[error("XML serialization failed: {0}")]
    Serialize(#[from] quick_xml::DeError),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with XmlError
pub type XmlResult<T> = Result<T, XmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "FRITZ_SUPPRESS_EMPTY_EMAIL".to_string(),
            reason: "Must be true or false".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for FRITZ_SUPPRESS_EMPTY_EMAIL: Must be true or false"
        );
    }

    #[test]
    fn test_xml_error_from_de_error() {
        let err: XmlError = quick_xml::DeError::Custom("bad value".to_string()).into();
        assert!(err.to_string().contains("bad value"));

        let err: XmlError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.to_string(), "I/O error: closed");
    }
}
