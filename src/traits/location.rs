//! Location store trait abstraction.
//!
//! The "location" is the persisted deep-link query string — the terminal
//! analog of a browser address bar. It is read once at startup and
//! replaced after every successful fetch; replacement overwrites the
//! previous value, so no history of past states accumulates.

use thiserror::Error;

/// Errors from reading or replacing the stored location.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored location is not valid UTF-8")]
    InvalidEncoding,
}

/// Port for the persisted deep-link query string.
///
/// Implementations include the production file-backed store and an
/// in-memory double for tests.
pub trait LocationStore: Send + Sync {
    /// Read the current query string, `None` when nothing is stored yet.
    fn read(&self) -> Result<Option<String>, LocationError>;

    /// Replace the stored query string with `query`.
    fn replace(&self, query: &str) -> Result<(), LocationError>;
}
