use super::effect::{CelebrationEffect, ConfettiBurst};
use super::endpoint::ContactEndpoint;
use super::form::ContactForm;
use super::status::{SubmitStatus, RESET_DELAY};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tracing::error;

/// What a call to [`SubmissionHandler::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field was empty; nothing was sent and the status is unchanged
    Incomplete,
    Sent,
    Failed,
}

/// Controller behind the contact form.
///
/// `submitting` only drives the disabled button. It does not stop a second
/// call to [`submit`](Self::submit) while one is in flight: both reach the
/// endpoint.
pub struct SubmissionHandler {
    form: Mutex<ContactForm>,
    submitting: AtomicBool,
    status: Arc<watch::Sender<SubmitStatus>>,
    endpoint: Arc<dyn ContactEndpoint>,
    effect: Arc<dyn CelebrationEffect>,
    burst: ConfettiBurst,
}

impl SubmissionHandler {
    pub fn new(endpoint: Arc<dyn ContactEndpoint>, effect: Arc<dyn CelebrationEffect>) -> Self {
        let (status, _) = watch::channel(SubmitStatus::Idle);

        Self {
            form: Mutex::new(ContactForm::default()),
            submitting: AtomicBool::new(false),
            status: Arc::new(status),
            endpoint,
            effect,
            burst: ConfettiBurst::default(),
        }
    }

    pub fn with_burst(mut self, burst: ConfettiBurst) -> Self {
        self.burst = burst;
        self
    }

    fn lock_form(&self) -> MutexGuard<'_, ContactForm> {
        self.form.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_name(&self, value: impl Into<String>) {
        self.lock_form().name = value.into();
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.lock_form().email = value.into();
    }

    pub fn set_message(&self, value: impl Into<String>) {
        self.lock_form().message = value.into();
    }

    /// Current field values.
    pub fn form(&self) -> ContactForm {
        self.lock_form().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Envoi..."
        } else {
            "Envoyer"
        }
    }

    pub fn status(&self) -> SubmitStatus {
        *self.status.borrow()
    }

    /// Watch banner transitions.
    pub fn subscribe(&self) -> watch::Receiver<SubmitStatus> {
        self.status.subscribe()
    }

    /// Submit the current form once.
    ///
    /// Must run inside a tokio runtime: the banner reset is a spawned timer.
    pub async fn submit(&self) -> SubmitOutcome {
        let form = self.form();
        if !form.is_complete() {
            return SubmitOutcome::Incomplete;
        }

        self.submitting.store(true, Ordering::SeqCst);

        let outcome = match self.endpoint.submit(&form).await {
            Ok(()) => {
                self.lock_form().clear();
                self.status.send_replace(SubmitStatus::Success);
                self.effect.celebrate(&self.burst);
                SubmitOutcome::Sent
            }
            Err(e) => {
                // Server detail stays in the log; the banner is generic
                error!("Contact submission failed: {}", e);
                self.status.send_replace(SubmitStatus::Error);
                SubmitOutcome::Failed
            }
        };

        self.submitting.store(false, Ordering::SeqCst);
        self.schedule_reset();
        outcome
    }

    /// Every submission schedules its own reset, even if a newer one landed since.
    fn schedule_reset(&self) {
        let status = self.status.clone();
        tokio::spawn(async move {
            tokio::time::sleep(RESET_DELAY).await;
            status.send_replace(SubmitStatus::Idle);
        });
    }
}
