//! Local persistence for the timer record.
//!
//! The whole state is one small JSON file (by default `~/.yap`):
//!
//! ```text
//! {
//!  "sessionCounter": 1,
//!  "state": "POMODORO",
//!  "start": 0,
//!  "end": 0
//! }
//! ```
//!
//! Writes go to a sibling temporary file that is then renamed over the
//! target, so a failed write never leaves a half-written record behind.
//! There is no locking between processes: the last writer wins.

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::model::Record;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed state file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// File-backed storage for the timer record.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a storage handle for the state file at `path`.
    ///
    /// Nothing is touched on disk until [`Storage::write`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored record.
    ///
    /// Returns `None` when there is no state file yet, or when the path is a
    /// directory. Any other failure to reach the file is an error.
    pub fn read(&self) -> Result<Option<Record>> {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.is_dir() => {
                debug!(path = %self.path.display(), "state path is a directory");
                return Ok(None);
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no state file");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        }
        let json = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let record = serde_json::from_str(&json).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        debug!(?record, "read state file");
        Ok(Some(record))
    }

    /// Replaces the stored record.
    pub fn write(&self, record: &Record) -> Result<()> {
        let json = serde_json::to_string_pretty(record).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.io_error(e));
        }

        debug!(?record, path = %self.path.display(), "wrote state file");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("yap"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
