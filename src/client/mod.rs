//! HTTP client for the transactional email provider.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and maps
//! provider responses onto [`ProviderError`].

mod async_wrapper;
pub use async_wrapper::{AsyncEmailProvider, AsyncEmailProviderImpl};

use crate::config::Config;
use crate::error::{ProviderError, ProviderResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{ProviderErrorBody, SendEmailRequest, SendEmailResponse};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for a Resend-compatible email API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct EmailProviderClient {
    /// Base URL for the provider API
    base_url: String,

    /// API key sent as a bearer token
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl EmailProviderClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.resend_api_url.clone(),
            api_key: config.resend_api_key.clone(),
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Send one email. Exactly one HTTP request is made, there is no retry.
    pub fn send_email(&self, request: &SendEmailRequest) -> ProviderResult<SendEmailResponse> {
        let url = self.build_url("/emails");
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!(to = ?request.to, subject = %request.subject, "POST {}", url);

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(request);

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                timer.complete_with_error();
                let error = Self::map_error(e);
                tracing::debug!("POST {} - Error: {:?}", url, error);
                return Err(error);
            }
        };

        let body = match response.into_string() {
            Ok(body) => {
                timer.complete();
                body
            }
            Err(e) => {
                timer.complete_with_error();
                return Err(ProviderError::HttpError(e.to_string()));
            }
        };

        let sent: SendEmailResponse = serde_json::from_str(&body)?;
        tracing::debug!(id = %sent.id, "POST {} - Success", url);
        Ok(sent)
    }

    /// Map a ureq error to a ProviderError.
    fn map_error(error: ureq::Error) -> ProviderError {
        match error {
            ureq::Error::Status(status, response) => {
                let raw = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                let message = serde_json::from_str::<ProviderErrorBody>(&raw)
                    .map(|body| body.message)
                    .unwrap_or(raw);

                if status >= 500 {
                    ProviderError::Unavailable { status, message }
                } else {
                    ProviderError::Rejected { status, message }
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ProviderError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ProviderError::Timeout
                } else {
                    ProviderError::HttpError(transport.to_string())
                }
            }
        }
    }
}
