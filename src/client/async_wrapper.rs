//! Async wrapper around the synchronous provider client.
//!
//! `ureq` blocks, so every call runs on tokio's blocking pool via
//! `tokio::task::spawn_blocking` to keep the server's worker threads free.

use crate::client::EmailProviderClient;
use crate::error::{ProviderError, ProviderResult};
use crate::models::{SendEmailRequest, SendEmailResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// The relay's only view of the email provider.
///
/// Implemented by [`AsyncEmailProviderImpl`] in production and by mocks in tests.
#[async_trait]
pub trait AsyncEmailProvider: Send + Sync {
    async fn send_email(&self, request: &SendEmailRequest) -> ProviderResult<SendEmailResponse>;
}

/// Async wrapper around [`EmailProviderClient`].
#[derive(Clone)]
pub struct AsyncEmailProviderImpl {
    client: Arc<EmailProviderClient>,
}

impl AsyncEmailProviderImpl {
    pub fn new(client: EmailProviderClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncEmailProvider for AsyncEmailProviderImpl {
    async fn send_email(&self, request: &SendEmailRequest) -> ProviderResult<SendEmailResponse> {
        let client = self.client.clone();
        let request = request.clone();

        tokio::task::spawn_blocking(move || client.send_email(&request))
            .await
            .map_err(|e| ProviderError::HttpError(format!("Task join error: {}", e)))?
    }
}
