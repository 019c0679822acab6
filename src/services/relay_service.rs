use crate::client::AsyncEmailProvider;
use crate::domain::{ContactMessage, ContactSubmission};
use crate::error::{RelayError, RelayResult};
use crate::metrics::{Metrics, RelayOutcome};
use crate::models::{ArchivedMessage, SendEmailResponse};
use crate::repositories::MessageArchive;
use crate::template::EmailTemplate;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Receive, validate and forward one contact submission.
///
/// Holds no per-request state, so one instance serves every concurrent
/// request.
pub struct ContactRelayService {
    provider: Arc<dyn AsyncEmailProvider>,
    template: EmailTemplate,
    archive: Option<Arc<dyn MessageArchive>>,
    metrics: Metrics,
}

impl ContactRelayService {
    pub fn new(
        provider: Arc<dyn AsyncEmailProvider>,
        template: EmailTemplate,
        metrics: Metrics,
    ) -> Self {
        Self {
            provider,
            template,
            archive: None,
            metrics,
        }
    }

    /// Also keep a copy of every delivered message in `archive`.
    pub fn with_archive(mut self, archive: Arc<dyn MessageArchive>) -> Self {
        self.archive = Some(archive);
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Relay a raw request body.
    pub async fn relay_body(&self, body: &[u8]) -> RelayResult<SendEmailResponse> {
        self.metrics.record_submission_received();

        let result = match serde_json::from_slice::<ContactSubmission>(body) {
            Ok(submission) => self.relay(submission).await,
            Err(e) => Err(RelayError::from(e)),
        };

        self.record(&result);
        result
    }

    async fn relay(&self, submission: ContactSubmission) -> RelayResult<SendEmailResponse> {
        let message = ContactMessage::validate(submission)?;
        let request = self.template.render(&message);

        debug!(sender_name = %message.name(), "Forwarding contact message to provider");
        let sent = self.provider.send_email(&request).await?;

        if let Some(archive) = &self.archive {
            let document = ArchivedMessage::new(&message, sent.id.as_str());
            Self::archive_detached(Arc::clone(archive), document);
        }

        Ok(sent)
    }

    /// The response does not wait for the store.
    fn archive_detached(archive: Arc<dyn MessageArchive>, document: ArchivedMessage) {
        tokio::spawn(async move {
            if let Err(e) = archive.store(&document).await {
                warn!(
                    provider_id = %document.provider_id,
                    "Failed to archive contact message: {}", e
                );
            }
        });
    }

    fn record(&self, result: &RelayResult<SendEmailResponse>) {
        let outcome = match result {
            Ok(sent) => {
                debug!(provider_id = %sent.id, "Contact message delivered");
                RelayOutcome::Delivered
            }
            Err(e) if e.status_code() == 400 => {
                warn!("Contact message rejected: {}", e);
                RelayOutcome::Rejected
            }
            Err(e) => {
                error!("Contact relay failed: {}", e);
                RelayOutcome::Failed
            }
        };
        self.metrics.record_outcome(outcome);
    }
}
