use super::participant::Participant;
use crate::error::Result;
use async_trait::async_trait;

/// Ordered storage for the participants of one meeting.
#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Appends to the end of the list.
    async fn append(&self, participant: Participant) -> Result<()>;
    /// Removes the entry at `index`, keeping the others in order.
    /// Returns `None` when `index` is out of range.
    async fn remove(&self, index: usize) -> Result<Option<Participant>>;
    async fn all(&self) -> Result<Vec<Participant>>;
    async fn len(&self) -> Result<usize>;
}

pub type ParticipantStoreBox = Box<dyn ParticipantStore>;
