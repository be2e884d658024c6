//! Gzip-compressed, append-only text streams.

use crate::errors::StorageError;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Output stream that appends one gzip member per write.
///
/// The file is opened for every [`append`](Self::append) call and closed
/// again before it returns, so no handle is held between generations. A file
/// written this way is a sequence of concatenated gzip members; read it back
/// with `flate2::read::MultiGzDecoder`.
///
/// Two appenders must not target the same path concurrently.
#[derive(Debug, Clone)]
pub struct GzAppender {
    path: PathBuf,
}

impl GzAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clear the file, leaving a single empty gzip member.
    pub fn truncate(&self) -> Result<(), StorageError> {
        let truncate_err = |source| StorageError::Truncate {
            path: self.path.clone(),
            source,
        };
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(truncate_err)?;
        GzEncoder::new(file, Compression::default())
            .finish()
            .map_err(truncate_err)?;
        info!(path = %self.path.display(), "truncated sample output");
        Ok(())
    }

    /// Append `blocks`, in order, as one compressed member.
    pub fn append<I, S>(&self, blocks: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(write_err)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        for block in blocks {
            encoder
                .write_all(block.as_ref().as_bytes())
                .map_err(write_err)?;
        }
        encoder
            .finish()
            .and_then(|mut w| w.flush())
            .map_err(write_err)?;
        Ok(())
    }
}
