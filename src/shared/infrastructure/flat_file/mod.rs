// Flat tabular file codec and snapshot writer.
//
// Purpose
// - Encode a sequence of records as CSV with a fixed header row, and decode it back.
// - Replace a file in one step so readers never observe a half written snapshot.
// - Move an unreadable file aside instead of overwriting it.
//
// Format
// - Comma delimited, `\n` terminated, fields quoted only when they contain a delimiter,
//   a quote or a line break. Embedded quotes are doubled.
// - The header row is always written, even for an empty sequence.
// - A zero byte input and a header only input both decode to no records.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlatFileError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}

pub fn encode<T: Serialize>(header: &[&str], rows: &[T]) -> Result<Vec<u8>, FlatFileError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| FlatFileError::Io(e.into_error()))
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, FlatFileError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Replace `path` with `bytes` via a temp file in the same directory and a rename.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), FlatFileError> {
    let dir = parent_dir(path);
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| FlatFileError::Io(e.error))?;
    sync_dir(dir)?;
    Ok(())
}

/// Rename `path` to `<name>.<label>-<stamp>` next to it, without clobbering an
/// earlier backup, and return the new path.
pub fn move_aside(path: &Path, label: &str, stamp: &str) -> Result<PathBuf, FlatFileError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut backup = path.with_file_name(format!("{name}.{label}-{stamp}"));
    let mut attempt = 1;
    while backup.exists() {
        backup = path.with_file_name(format!("{name}.{label}-{stamp}-{attempt}"));
        attempt += 1;
    }
    fs::rename(path, &backup)?;
    sync_dir(parent_dir(&backup))?;
    Ok(backup)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

// A rename is only durable once the directory entry itself is flushed.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
