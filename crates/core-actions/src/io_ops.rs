//! File store: whole-file read into a `LineBuffer`, serialized write back.
//!
//! Synchronous and minimal. Reads accept any bytes (invalid UTF-8 is replaced);
//! writes truncate the file to the serialized length before writing.

use core_text::LineBuffer;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("cannot open {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OpenError {
    pub fn is_not_found(&self) -> bool {
        match self {
            OpenError::Read { source, .. } => source.kind() == io::ErrorKind::NotFound,
        }
    }
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Read `path` into a clean buffer with the given tab stop.
pub fn open_file(path: &Path, tab_stop: usize) -> Result<LineBuffer, OpenError> {
    let bytes = std::fs::read(path).map_err(|source| {
        tracing::error!(target: "io", path = %path.display(), error = %source, "file_open_error");
        OpenError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let buffer = LineBuffer::from_text(&text, tab_stop);
    tracing::info!(target: "io", bytes = bytes.len(), rows = buffer.len(), "file_opened");
    Ok(buffer)
}

/// Write the serialized buffer to `path`, creating it if needed. Returns the
/// byte count written. The buffer's dirty flag is left to the caller.
pub fn write_file(path: &Path, buffer: &LineBuffer) -> Result<usize, SaveError> {
    let content = buffer.serialize();
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    file.set_len(content.len() as u64)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    tracing::info!(target: "io", bytes = content.len(), "file_saved");
    Ok(content.len())
}
