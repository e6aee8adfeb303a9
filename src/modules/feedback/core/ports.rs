// Ports define what the entry store needs from the outside world, without implementing it.
//
// Responsibilities
// - Read and write the whole sequence of entries as one snapshot.
//
// Boundaries
// - No partial updates. Every write replaces the persisted sequence entirely.

use crate::modules::feedback::core::entry::FeedbackEntry;
use crate::shared::infrastructure::flat_file::FlatFileError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    FlatFile(#[from] FlatFileError),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EntryPersistence: Send + Sync {
    /// Create an empty store with its header if nothing is persisted yet.
    async fn ensure_initialized(&self) -> Result<(), PersistenceError>;

    async fn read_all(&self) -> Result<Vec<FeedbackEntry>, PersistenceError>;

    async fn write_all(&self, entries: &[FeedbackEntry]) -> Result<(), PersistenceError>;
}
