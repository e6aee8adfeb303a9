// Entry store: the in-memory sequence of feedback entries and its persisted snapshot.
//
// Responsibilities
// - Hydrate once from persistence; unreadable content degrades to no entries.
// - Keep insertion order. Display order is derived by the list projection.
// - Rewrite the full snapshot on every append and delete, and only swap the
//   in-memory sequence after the write succeeded.
//
// Concurrency
// - Mutations hold the write lock across the snapshot write, so requests inside
//   one process are serialized. Nothing guards against a second process.

use crate::modules::feedback::core::entry::{COLUMNS, FeedbackEntry};
use crate::modules::feedback::core::ports::{EntryPersistence, PersistenceError};
use crate::shared::infrastructure::flat_file;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("index {index} is out of range for {len} entries")]
    OutOfRange { index: i64, len: usize },

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Read the persisted entries, substituting an empty sequence when they cannot be read.
pub async fn load(persistence: &dyn EntryPersistence) -> Vec<FeedbackEntry> {
    match persistence.read_all().await {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(%error, "persisted feedback is unreadable, starting with no entries");
            Vec::new()
        }
    }
}

pub struct EntryStore {
    persistence: Arc<dyn EntryPersistence>,
    entries: RwLock<Vec<FeedbackEntry>>,
}

impl EntryStore {
    pub async fn open(persistence: Arc<dyn EntryPersistence>) -> Self {
        if let Err(error) = persistence.ensure_initialized().await {
            tracing::warn!(%error, "could not initialize the feedback store");
        }
        let entries = load(persistence.as_ref()).await;
        tracing::info!(count = entries.len(), "feedback entries loaded");
        Self {
            persistence,
            entries: RwLock::new(entries),
        }
    }

    /// Snapshot of the entries in insertion order.
    pub async fn entries(&self) -> Vec<FeedbackEntry> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn append(&self, entry: FeedbackEntry) -> Result<(), StoreError> {
        let mut guard = self.entries.write().await;
        let mut next = guard.clone();
        next.push(entry);
        self.persistence.write_all(&next).await?;
        *guard = next;
        tracing::debug!(count = guard.len(), "feedback entry appended");
        Ok(())
    }

    /// Remove the entry at `index` in insertion order and return it.
    pub async fn delete_at(&self, index: i64) -> Result<FeedbackEntry, StoreError> {
        let mut guard = self.entries.write().await;
        let len = guard.len();
        let position = usize::try_from(index)
            .ok()
            .filter(|position| *position < len)
            .ok_or(StoreError::OutOfRange { index, len })?;
        let mut next = guard.clone();
        let removed = next.remove(position);
        self.persistence.write_all(&next).await?;
        *guard = next;
        tracing::debug!(index, count = guard.len(), "feedback entry deleted");
        Ok(removed)
    }

    /// Serialize the current entries in the persisted tabular format.
    pub async fn export(&self) -> Result<Vec<u8>, StoreError> {
        let guard = self.entries.read().await;
        let bytes = flat_file::encode(&COLUMNS, &guard).map_err(PersistenceError::from)?;
        Ok(bytes)
    }
}
