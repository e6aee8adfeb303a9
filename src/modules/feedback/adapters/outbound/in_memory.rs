// In memory implementation of the EntryPersistence port.
//
// Purpose
// - Support store and handler tests and local development without touching the disk.
//
// Responsibilities
// - Hold the last written snapshot, or nothing before initialization.
// - Simulate an unavailable backend when toggled offline.

use crate::modules::feedback::core::entry::FeedbackEntry;
use crate::modules::feedback::core::ports::{EntryPersistence, PersistenceError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEntries {
    rows: RwLock<Option<Vec<FeedbackEntry>>>,
    writes: AtomicUsize,
    is_offline: AtomicBool,
}

impl InMemoryEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<FeedbackEntry>) -> Self {
        Self {
            rows: RwLock::new(Some(entries)),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> Option<Vec<FeedbackEntry>> {
        self.rows.read().await.clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<(), PersistenceError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(PersistenceError::Backend("Entry store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EntryPersistence for InMemoryEntries {
    async fn ensure_initialized(&self) -> Result<(), PersistenceError> {
        self.check_online()?;
        let mut guard = self.rows.write().await;
        if guard.is_none() {
            *guard = Some(Vec::new());
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<FeedbackEntry>, PersistenceError> {
        self.check_online()?;
        Ok(self.rows.read().await.clone().unwrap_or_default())
    }

    async fn write_all(&self, entries: &[FeedbackEntry]) -> Result<(), PersistenceError> {
        self.check_online()?;
        *self.rows.write().await = Some(entries.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
