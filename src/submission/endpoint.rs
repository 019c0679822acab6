use super::form::ContactForm;
use crate::error::SubmitError;
use crate::server::ErrorResponse;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Whatever accepts a filled-in contact form.
#[async_trait]
pub trait ContactEndpoint: Send + Sync {
    /// Send the form once. No retry.
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

/// Posts the form to a relay endpoint over HTTP.
#[derive(Clone)]
pub struct HttpContactEndpoint {
    url: String,
    agent: Arc<ureq::Agent>,
}

impl HttpContactEndpoint {
    /// `base_url` is the site origin; the form goes to `{base_url}/api/contact`.
    pub fn new(base_url: &str) -> Self {
        // No explicit timeout: the request waits as long as the transport does
        let agent = ureq::AgentBuilder::new().build();

        Self {
            url: format!("{}/api/contact", base_url.trim_end_matches('/')),
            agent: Arc::new(agent),
        }
    }

    /// Same as [`new`](Self::new) but bounded by `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            url: format!("{}/api/contact", base_url.trim_end_matches('/')),
            agent: Arc::new(agent),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn submit_blocking(&self, form: &ContactForm) -> Result<(), SubmitError> {
        match self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_json(form)
        {
            Ok(response) => response
                .into_json::<serde_json::Value>()
                .map(|_| ())
                .map_err(|e| SubmitError::InvalidResponse(e.to_string())),
            Err(ureq::Error::Status(status, response)) => {
                let raw = response.into_string().unwrap_or_default();
                let message = serde_json::from_str::<ErrorResponse>(&raw)
                    .map(|body| body.error)
                    .unwrap_or(raw);
                Err(SubmitError::Rejected { status, message })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(SubmitError::Transport(transport.to_string()))
            }
        }
    }
}

#[async_trait]
impl ContactEndpoint for HttpContactEndpoint {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let endpoint = self.clone();
        let form = form.clone();

        tokio::task::spawn_blocking(move || endpoint.submit_blocking(&form))
            .await
            .map_err(|e| SubmitError::Transport(format!("Task join error: {}", e)))?
    }
}
