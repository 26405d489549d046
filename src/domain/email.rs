//! EmailField value object.

use super::errors::ValidationError;
use super::syntax;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Category attached to an email element in the phonebook output.
///
/// vCard input does not tell email categories apart, so every address is
/// filed as private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailClassifier {
    #[default]
    Private,
}

impl EmailClassifier {
    /// The attribute text written to the phonebook.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
        }
    }
}

impl fmt::Display for EmailClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The email address of a contact.
///
/// The stored value is either empty (no address known) or a normalized,
/// syntactically valid address. Every assignment goes through
/// [`EmailField::set_value`], which leaves the previous value in place when
/// the new one is rejected.
///
/// # Example
///
/// ```
/// use vcard2fritz::domain::EmailField;
///
/// let mut email = EmailField::with_address("  alice@example.com\t");
/// assert_eq!(email.value(), "alice@example.com");
///
/// assert!(email.set_value("bad@@domain").is_err());
/// assert_eq!(email.value(), "alice@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EmailField {
    value: String,
}

impl EmailField {
    /// Only one address per contact can be represented, so the slot is fixed.
    pub const ID: u32 = 0;

    /// Create an empty email field.
    pub fn new() -> Self {
        Self {
            value: String::new(),
        }
    }

    /// Create a field from a raw upstream value.
    ///
    /// Invalid input leaves the field empty; the rejection is reported on the
    /// log but does not fail construction.
    pub fn with_address(raw: &str) -> Self {
        let mut field = Self::new();
        // Rejection is already reported by set_value and the field stays empty.
        let _ = field.set_value(raw);
        field
    }

    /// Create a field from an optional upstream value, `None` meaning no address.
    pub fn from_optional(raw: Option<&str>) -> Self {
        Self::with_address(raw.unwrap_or_default())
    }

    /// Whether no address is set.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The stored address, or `""` when none is set.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The stored address, or `None` when none is set.
    pub fn address(&self) -> Option<&str> {
        if self.is_empty() {
            None
        } else {
            Some(&self.value)
        }
    }

    /// Normalize, validate, and store a new address.
    ///
    /// An input that normalizes to the empty string clears the field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmailSyntax` if the normalized input is
    /// non-empty and not a valid address. The stored value is unchanged in
    /// that case and the rejection is logged at `warn` level.
    pub fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        let normalized = Self::normalize(raw);

        if !Self::validate(&normalized) {
            let err = ValidationError::InvalidEmailSyntax {
                original: raw.to_string(),
                normalized,
            };
            tracing::warn!(
                original = err.original(),
                normalized = err.normalized(),
                "{}",
                err
            );
            return Err(err);
        }

        tracing::debug!(email = %normalized, "Email address accepted");
        self.value = normalized;
        Ok(())
    }

    /// Clear the stored address.
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Strip surrounding blanks, then drop every tab character.
    ///
    /// Blanks are space and the ASCII control characters (`<= U+0020`).
    /// Unicode spaces such as NBSP are kept and fail validation later.
    /// Tabs are removed anywhere in the string, not only at the ends.
    pub fn normalize(raw: &str) -> String {
        raw.trim_matches(|c: char| c <= ' ').replace('\t', "")
    }

    /// Check a normalized candidate. The empty string is a valid absence.
    pub fn validate(candidate: &str) -> bool {
        candidate.is_empty() || syntax::is_valid_address(candidate)
    }

    /// Numeric identity attribute for the phonebook output.
    pub fn id(&self) -> u32 {
        Self::ID
    }

    /// Category attribute for the phonebook output.
    pub fn classifier(&self) -> EmailClassifier {
        EmailClassifier::Private
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl From<&str> for EmailField {
    fn from(raw: &str) -> Self {
        Self::with_address(raw)
    }
}

impl From<String> for EmailField {
    fn from(raw: String) -> Self {
        Self::with_address(&raw)
    }
}

// Serde support - serialize as string
impl Serialize for EmailField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize leniently, invalid input yields an empty field
impl<'de> Deserialize<'de> for EmailField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(EmailField::from_optional(raw.as_deref()))
    }
}

impl fmt::Display for EmailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
