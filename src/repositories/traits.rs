use crate::error::ArchiveResult;
use crate::models::ArchivedMessage;
use async_trait::async_trait;

/// Store for copies of delivered contact messages.
///
/// Archiving is best effort: the relay answers the visitor without waiting
/// for `store`, and a failed write is only logged.
#[async_trait]
pub trait MessageArchive: Send + Sync {
    /// Persist one delivered message.
    async fn store(&self, message: &ArchivedMessage) -> ArchiveResult<()>;
}
