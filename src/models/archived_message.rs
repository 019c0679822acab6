//! Document stored by the optional message archive.

use crate::domain::ContactMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A delivered contact message as written to the document store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArchivedMessage {
    pub name: String,
    pub email: String,
    pub message: String,

    /// Id the provider assigned to the outbound email
    pub provider_id: String,

    pub received_at: DateTime<Utc>,
}

impl ArchivedMessage {
    pub fn new(message: &ContactMessage, provider_id: impl Into<String>) -> Self {
        Self {
            name: message.name().to_string(),
            email: message.email().to_string(),
            message: message.message().to_string(),
            provider_id: provider_id.into(),
            received_at: Utc::now(),
        }
    }
}
