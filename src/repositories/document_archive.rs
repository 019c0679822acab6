use crate::error::{ArchiveError, ArchiveResult};
use crate::models::ArchivedMessage;
use crate::repositories::traits::MessageArchive;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Archive backed by a document database's REST collection endpoint.
///
/// Each message becomes one `POST {collection_url}` with the document as a
/// JSON body. The store assigns the document id.
#[derive(Clone)]
pub struct DocumentStoreArchive {
    collection_url: String,
    api_key: Option<String>,
    agent: Arc<ureq::Agent>,
}

impl DocumentStoreArchive {
    pub fn new(collection_url: String, api_key: Option<String>, timeout_secs: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .build();

        Self {
            collection_url,
            api_key,
            agent: Arc::new(agent),
        }
    }

    fn store_blocking(&self, message: &ArchivedMessage) -> ArchiveResult<()> {
        let mut request = self
            .agent
            .post(&self.collection_url)
            .set("Content-Type", "application/json");
        if let Some(key) = &self.api_key {
            request = request.set("Authorization", &format!("Bearer {}", key));
        }

        match request.send_json(message) {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(status, response)) => Err(ArchiveError::StoreError {
                status,
                message: response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string()),
            }),
            Err(ureq::Error::Transport(transport)) => {
                Err(ArchiveError::HttpError(transport.to_string()))
            }
        }
    }
}

#[async_trait]
impl MessageArchive for DocumentStoreArchive {
    async fn store(&self, message: &ArchivedMessage) -> ArchiveResult<()> {
        let archive = self.clone();
        let message = message.clone();

        tokio::task::spawn_blocking(move || archive.store_blocking(&message))
            .await
            .map_err(|e| ArchiveError::HttpError(format!("Task join error: {}", e)))?
    }
}
