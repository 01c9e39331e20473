use crate::domain::participant::Participant;
use crate::domain::ports::ParticipantStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory participant list for a single session.
///
/// Uses `Arc<RwLock<Vec<Participant>>>` so clones share the same list.
#[derive(Default, Clone)]
pub struct InMemoryParticipantStore {
    participants: Arc<RwLock<Vec<Participant>>>,
}

impl InMemoryParticipantStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantStore for InMemoryParticipantStore {
    async fn append(&self, participant: Participant) -> Result<()> {
        let mut participants = self.participants.write().await;
        participants.push(participant);
        tracing::debug!(count = participants.len(), "participant appended");
        Ok(())
    }

    async fn remove(&self, index: usize) -> Result<Option<Participant>> {
        let mut participants = self.participants.write().await;
        if index < participants.len() {
            let removed = participants.remove(index);
            tracing::debug!(index, count = participants.len(), "participant removed");
            Ok(Some(removed))
        } else {
            Ok(None)
        }
    }

    async fn all(&self) -> Result<Vec<Participant>> {
        let participants = self.participants.read().await;
        Ok(participants.clone())
    }

    async fn len(&self) -> Result<usize> {
        let participants = self.participants.read().await;
        Ok(participants.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{ParticipantCandidate, validate};

    fn participant(name: &str) -> Participant {
        validate(&ParticipantCandidate::new(name, "50000")).unwrap()
    }

    fn names(participants: &[Participant]) -> Vec<&str> {
        participants.iter().map(Participant::name).collect()
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = InMemoryParticipantStore::new();
        store.append(participant("Ada")).await.unwrap();
        store.append(participant("Bob")).await.unwrap();

        let all = store.all().await.unwrap();
        assert_eq!(names(&all), ["Ada", "Bob"]);
        assert_eq!(store.len().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_remove_by_position() {
        let store = InMemoryParticipantStore::new();
        for name in ["Ada", "Bob", "Cy", "Di"] {
            store.append(participant(name)).await.unwrap();
        }

        let removed = store.remove(1).await.unwrap().unwrap();
        assert_eq!(removed.name(), "Bob");
        assert_eq!(names(&store.all().await.unwrap()), ["Ada", "Cy", "Di"]);
    }

    #[tokio::test]
    async fn test_remove_out_of_range_is_noop() {
        let store = InMemoryParticipantStore::new();
        store.append(participant("Ada")).await.unwrap();

        assert!(store.remove(1).await.unwrap().is_none());
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryParticipantStore::new();
        let other = store.clone();
        store.append(participant("Ada")).await.unwrap();
        assert_eq!(other.len().await.unwrap(), 1);
    }
}
