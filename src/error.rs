//! Error types for the contact relay.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Generic message returned to clients for every unexpected failure.
pub const GENERIC_SEND_ERROR: &str = "Erreur lors de l'envoi du message";

/// Errors that can occur when talking to the email provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider refused the message (4xx with an error object)
    #[error("Provider rejected message (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Provider failed on its side (5xx)
    #[error("Provider unavailable (status {status}): {message}")]
    Unavailable { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

impl ProviderError {
    /// Whether the provider itself reported the message as unacceptable.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised by the message archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Archive request failed: {0}")]
    HttpError(String),

    #[error("Archive error (status {status}): {message}")]
    StoreError { status: u16, message: String },
}

/// Errors seen by the browser-side submission handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Endpoint answered with a non-success status
    #[error("Submission rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never got an answer
    #[error("Network error: {0}")]
    Transport(String),

    /// Endpoint answered 2xx with a body that is not JSON
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

/// Everything that can go wrong while relaying one submission.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Request body was not a JSON object
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Submission failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Provider call failed
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl RelayError {
    /// HTTP status the relay endpoint answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Provider(e) if e.is_rejection() => 400,
            _ => 500,
        }
    }

    /// Message placed in the response's `error` field.
    ///
    /// Only validation and provider-rejection messages are forwarded; every
    /// other failure collapses to [`GENERIC_SEND_ERROR`].
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Provider(ProviderError::Rejected { message, .. }) => message.clone(),
            _ => GENERIC_SEND_ERROR.to_string(),
        }
    }
}

/// Convenience type alias for Results with ProviderError
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ArchiveError
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Convenience type alias for Results with RelayError
pub type RelayResult<T> = Result<T, RelayError>;
