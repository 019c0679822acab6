use async_trait::async_trait;
use portfolio_contact_relay::error::{ProviderError, ProviderResult};
use portfolio_contact_relay::{AsyncEmailProvider, SendEmailRequest, SendEmailResponse};
use std::sync::{Arc, Mutex};

/// What the mock provider answers.
#[allow(dead_code)]
#[derive(Clone)]
pub enum ProviderBehavior {
    Accept(String),
    Reject { status: u16, message: String },
    Unavailable,
    Unreachable(String),
}

/// Mock email provider recording every request it receives.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockEmailProvider {
    behavior: ProviderBehavior,
    requests: Arc<Mutex<Vec<SendEmailRequest>>>,
}

#[allow(dead_code)]
impl MockEmailProvider {
    pub fn new(behavior: ProviderBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn accepting(id: &str) -> Self {
        Self::new(ProviderBehavior::Accept(id.to_string()))
    }

    pub fn requests(&self) -> Vec<SendEmailRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AsyncEmailProvider for MockEmailProvider {
    async fn send_email(&self, request: &SendEmailRequest) -> ProviderResult<SendEmailResponse> {
        self.requests.lock().unwrap().push(request.clone());

        match self.behavior.clone() {
            ProviderBehavior::Accept(id) => Ok(SendEmailResponse::new(id)),
            ProviderBehavior::Reject { status, message } => {
                Err(ProviderError::Rejected { status, message })
            }
            ProviderBehavior::Unavailable => Err(ProviderError::Unavailable {
                status: 503,
                message: "Service Unavailable".to_string(),
            }),
            ProviderBehavior::Unreachable(detail) => Err(ProviderError::HttpError(detail)),
        }
    }
}
