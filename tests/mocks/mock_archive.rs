use async_trait::async_trait;
use portfolio_contact_relay::error::{ArchiveError, ArchiveResult};
use portfolio_contact_relay::{ArchivedMessage, MessageArchive};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

/// In-memory archive, optionally failing every write.
///
/// The relay stores in a background task, so tests wait with
/// [`wait_for_stored`](Self::wait_for_stored) instead of reading right away.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockArchive {
    stored: Arc<Mutex<Vec<ArchivedMessage>>>,
    fail: bool,
    gate: Option<Arc<Semaphore>>,
}

#[allow(dead_code)]
impl MockArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Every write blocks until the test adds a permit.
    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn stored(&self) -> Vec<ArchivedMessage> {
        self.stored.lock().unwrap().clone()
    }

    /// Wait until at least `count` documents were written, or panic after 2 s.
    pub async fn wait_for_stored(&self, count: usize) -> Vec<ArchivedMessage> {
        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                let stored = self.stored();
                if stored.len() >= count {
                    return stored;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("archive write never happened")
    }
}

#[async_trait]
impl MessageArchive for MockArchive {
    async fn store(&self, message: &ArchivedMessage) -> ArchiveResult<()> {
        if let Some(gate) = &self.gate {
            let permit = gate.acquire().await.expect("gate closed");
            permit.forget();
        }

        if self.fail {
            return Err(ArchiveError::HttpError("store offline".to_string()));
        }
        self.stored.lock().unwrap().push(message.clone());
        Ok(())
    }
}
