//! Resend-compatible `POST /emails` payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a send request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendEmailRequest {
    /// Sender identity, fixed by configuration
    pub from: String,

    /// Recipients, fixed by configuration
    pub to: Vec<String>,

    pub subject: String,

    /// Rendered HTML body (user fields already escaped)
    pub html: String,

    /// Visitor address, so the owner can answer with a plain "reply"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reply_to: Vec<String>,
}

/// Successful provider answer. Forwarded verbatim as `data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendEmailResponse {
    pub id: String,

    /// Any other fields the provider returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SendEmailResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }
}

/// Error object returned by the provider alongside a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub status_code: Option<u16>,

    pub message: String,

    #[serde(default)]
    pub name: Option<String>,
}
