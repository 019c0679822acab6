//! EmailAddress value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Longest address accepted (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

/// A shape-checked email address.
///
/// The check is intentionally shallow: it catches typos in a contact form,
/// not every address RFC 5322 allows or forbids. Deliverability is the
/// provider's concern.
///
/// # Example
///
/// ```
/// use portfolio_contact_relay::domain::EmailAddress;
///
/// let email = EmailAddress::new("  a@x.com ").unwrap();
/// assert_eq!(email.as_str(), "a@x.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress from user input.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyField("email")` for blank input
    /// - `ValidationError::TooLong` above [`MAX_EMAIL_LEN`] characters
    /// - `ValidationError::InvalidEmail` when the shape check fails
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let email = email.as_ref().trim();

        if email.is_empty() {
            return Err(ValidationError::EmptyField("email"));
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }
        if !Self::has_valid_shape(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }

        Ok(Self(email.to_string()))
    }

    /// One '@', a non-empty local part, and a dotted domain without empty labels.
    fn has_valid_shape(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.contains('@') || !domain.contains('.') {
            return false;
        }

        domain.split('.').all(|label| !label.is_empty())
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
