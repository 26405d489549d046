//! Domain validation errors.

use std::fmt;

/// Errors that can occur when assigning a value to a contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The normalized email address is non-empty and not syntactically valid.
    ///
    /// Carries both the raw input and the normalized form that was checked.
    InvalidEmailSyntax { original: String, normalized: String },
}

impl ValidationError {
    /// The raw input as it was handed to the field.
    pub fn original(&self) -> &str {
        match self {
            Self::InvalidEmailSyntax { original, .. } => original,
        }
    }

    /// The normalized input that failed validation.
    pub fn normalized(&self) -> &str {
        match self {
            Self::InvalidEmailSyntax { normalized, .. } => normalized,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmailSyntax {
                original,
                normalized,
            } => write!(
                f,
                "Mail address '{}' (trimmed: {}) is not valid",
                original, normalized
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_display_names_both_forms() {
        let err = ValidationError::InvalidEmailSyntax {
            original: "\tnot-an-email ".to_string(),
            normalized: "not-an-email".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Mail address '\tnot-an-email ' (trimmed: not-an-email) is not valid"
        );
        assert_eq!(err.original(), "\tnot-an-email ");
        assert_eq!(err.normalized(), "not-an-email");
    }
}
