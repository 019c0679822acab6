//! The contact message submitted through the portfolio form.

use super::email::EmailAddress;
use super::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// Maximum length of the sender's name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of the message body, in characters.
pub const MAX_MESSAGE_LEN: usize = 5000;

/// Wire shape of a submission, exactly as the form posts it.
///
/// Every field is optional so that a body with missing keys still decodes
/// and fails in [`ContactMessage::validate`] with a field-level error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A validated contact message.
///
/// Lives for a single relay request and is never persisted by the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: EmailAddress,
    message: String,
}

impl ContactMessage {
    /// Build a message from raw field values.
    pub fn new(
        name: impl AsRef<str>,
        email: impl AsRef<str>,
        message: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let name = bounded("name", required("name", name.as_ref())?, MAX_NAME_LEN)?.to_string();
        let email = EmailAddress::new(email)?;

        // Keep the body as typed: only reject it when there is nothing but
        // whitespace, the template renders it with `pre-wrap`. The bound
        // counts the stored text, surrounding whitespace included.
        let message = message.as_ref();
        required("message", message)?;
        bounded("message", message, MAX_MESSAGE_LEN)?;

        Ok(Self {
            name,
            email,
            message: message.to_string(),
        })
    }

    /// Validate a decoded submission. Fields are checked in form order and
    /// the first failure wins.
    pub fn validate(submission: ContactSubmission) -> Result<Self, ValidationError> {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;

        Self::new(
            name.unwrap_or_default(),
            email.unwrap_or_default(),
            message.unwrap_or_default(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Trimmed and non-empty.
fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed)
}

fn bounded<'a>(
    field: &'static str,
    value: &'a str,
    max: usize,
) -> Result<&'a str, ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_message() {
        let msg = ContactMessage::new(" Alice ", "a@x.com", "Hello").unwrap();
        assert_eq!(msg.name(), "Alice");
        assert_eq!(msg.email().as_str(), "a@x.com");
        assert_eq!(msg.message(), "Hello");
    }

    #[test]
    fn test_message_whitespace_preserved() {
        let msg = ContactMessage::new("Bob", "b@x.com", "line one\n\n  line two").unwrap();
        assert_eq!(msg.message(), "line one\n\n  line two");
    }

    #[test]
    fn test_missing_fields_reported_in_form_order() {
        let result = ContactMessage::validate(ContactSubmission::default());
        assert_eq!(result, Err(ValidationError::EmptyField("name")));

        let result = ContactMessage::validate(ContactSubmission {
            name: Some("Alice".into()),
            email: None,
            message: Some("Hi".into()),
        });
        assert_eq!(result, Err(ValidationError::EmptyField("email")));

        let result = ContactMessage::validate(ContactSubmission {
            name: Some("Alice".into()),
            email: Some("a@x.com".into()),
            message: Some(" \n\t".into()),
        });
        assert_eq!(result, Err(ValidationError::EmptyField("message")));
    }

    #[test]
    fn test_length_bounds() {
        let long_name = "n".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            ContactMessage::new(long_name, "a@x.com", "Hi"),
            Err(ValidationError::TooLong { field: "name", .. })
        ));

        let at_limit = "m".repeat(MAX_MESSAGE_LEN);
        assert!(ContactMessage::new("Alice", "a@x.com", at_limit).is_ok());

        let too_long = "m".repeat(MAX_MESSAGE_LEN + 1);
        assert!(matches!(
            ContactMessage::new("Alice", "a@x.com", too_long),
            Err(ValidationError::TooLong { field: "message", .. })
        ));
    }

    #[test]
    fn test_name_bound_ignores_surrounding_whitespace() {
        let padded = format!("  Alice{}", " ".repeat(MAX_NAME_LEN));
        let msg = ContactMessage::new(padded, "a@x.com", "Hi").unwrap();
        assert_eq!(msg.name(), "Alice");

        let at_limit = format!(" {} ", "n".repeat(MAX_NAME_LEN));
        assert!(ContactMessage::new(at_limit, "a@x.com", "Hi").is_ok());
    }

    #[test]
    fn test_message_bound_counts_stored_text() {
        let padded = format!("{}\n", "m".repeat(MAX_MESSAGE_LEN));
        assert!(matches!(
            ContactMessage::new("Alice", "a@x.com", padded),
            Err(ValidationError::TooLong { field: "message", .. })
        ));
    }

    #[test]
    fn test_submission_decodes_with_missing_keys() {
        let submission: ContactSubmission =
            serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        assert_eq!(submission.name.as_deref(), Some("Alice"));
        assert!(submission.email.is_none());
        assert!(submission.message.is_none());
    }
}
