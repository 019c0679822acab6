use async_trait::async_trait;
use portfolio_contact_relay::{ContactEndpoint, ContactForm, SubmitError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Mock relay endpoint.
///
/// When gated, each call blocks until the test releases a permit, which
/// lets a test hold several submissions in flight at once.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactEndpoint {
    result: Result<(), SubmitError>,
    calls: Arc<AtomicUsize>,
    forms: Arc<Mutex<Vec<ContactForm>>>,
    gate: Option<Arc<Semaphore>>,
}

#[allow(dead_code)]
impl MockContactEndpoint {
    pub fn succeeding() -> Self {
        Self::with_result(Ok(()))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::with_result(Err(SubmitError::Rejected {
            status,
            message: message.to_string(),
        }))
    }

    fn with_result(result: Result<(), SubmitError>) -> Self {
        Self {
            result,
            calls: Arc::new(AtomicUsize::new(0)),
            forms: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn forms(&self) -> Vec<ContactForm> {
        self.forms.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactEndpoint for MockContactEndpoint {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.forms.lock().unwrap().push(form.clone());

        if let Some(gate) = &self.gate {
            let permit = gate.acquire().await.expect("gate closed");
            permit.forget();
        }

        self.result.clone()
    }
}
