// Flat CSV file implementation of the EntryPersistence port.
//
// Responsibilities
// - Keep the entries at a fixed path with the header `name,dept,tag,note,time`.
// - Create a header only file on first run.
// - Write each snapshot atomically (temp file in the same directory, then rename).
// - Rename a file that cannot be read to `<name>.corrupt-<stamp>` before anything overwrites it.
//
// File access is blocking and short, so it runs on the blocking pool.

use crate::modules::feedback::core::entry::{COLUMNS, FeedbackEntry};
use crate::modules::feedback::core::ports::{EntryPersistence, PersistenceError};
use crate::shared::core::primitives::local_now;
use crate::shared::infrastructure::flat_file::{self, FlatFileError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const BACKUP_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

#[derive(Debug, Clone)]
pub struct CsvFileEntries {
    path: PathBuf,
}

impl CsvFileEntries {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn blocking<T, F>(&self, work: F) -> Result<T, PersistenceError>
    where
        T: Send + 'static,
        F: FnOnce(PathBuf) -> Result<T, FlatFileError> + Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || work(path))
            .await
            .map_err(|e| PersistenceError::Backend(e.to_string()))?
            .map_err(PersistenceError::from)
    }
}

fn read_entries(path: &Path) -> Result<Vec<FeedbackEntry>, FlatFileError> {
    match fs::read(path) {
        Ok(bytes) => flat_file::decode(&bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

// The next snapshot write must not replace history nobody could read, so the
// file is renamed out of the way first. If the rename fails the directory is
// not writable either, and so the write fails too.
fn quarantine(path: &Path, error: &FlatFileError) {
    let stamp = local_now().format(BACKUP_STAMP_FORMAT).to_string();
    match flat_file::move_aside(path, "corrupt", &stamp) {
        Ok(backup) => tracing::warn!(
            %error,
            backup = %backup.display(),
            "unreadable feedback file moved aside"
        ),
        Err(move_error) => tracing::error!(
            %error,
            %move_error,
            path = %path.display(),
            "unreadable feedback file could not be moved aside"
        ),
    }
}

#[async_trait::async_trait]
impl EntryPersistence for CsvFileEntries {
    async fn ensure_initialized(&self) -> Result<(), PersistenceError> {
        self.blocking(|path| {
            if path.exists() {
                return Ok(());
            }
            let header = flat_file::encode::<FeedbackEntry>(&COLUMNS, &[])?;
            flat_file::write_atomic(&path, &header)?;
            tracing::info!(path = %path.display(), "created feedback store");
            Ok(())
        })
        .await
    }

    async fn read_all(&self) -> Result<Vec<FeedbackEntry>, PersistenceError> {
        self.blocking(|path| read_entries(&path).inspect_err(|error| quarantine(&path, error)))
            .await
    }

    async fn write_all(&self, entries: &[FeedbackEntry]) -> Result<(), PersistenceError> {
        let entries = entries.to_vec();
        self.blocking(move |path| {
            let bytes = flat_file::encode(&COLUMNS, &entries)?;
            flat_file::write_atomic(&path, &bytes)
        })
        .await
    }
}
