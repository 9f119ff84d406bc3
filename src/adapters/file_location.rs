//! File-backed location store.
//!
//! Persists the deep-link query string at `~/.gamedeck/location`, one line
//! of text. Writing goes through a temp file and rename so a crash
//! mid-write never leaves a torn location behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::traits::{LocationError, LocationStore};

/// Location store persisted to a single file.
#[derive(Debug, Clone)]
pub struct FileLocation {
    path: PathBuf,
}

impl FileLocation {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default path: `~/.gamedeck/location`.
    pub fn default_path() -> Result<PathBuf, std::io::Error> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found")
        })?;
        Ok(home.join(".gamedeck").join("location"))
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocationStore for FileLocation {
    fn read(&self) -> Result<Option<String>, LocationError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let text = String::from_utf8(bytes).map_err(|_| LocationError::InvalidEncoding)?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }

    fn replace(&self, query: &str) -> Result<(), LocationError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write to temp file, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, query)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}
