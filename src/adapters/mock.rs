//! Test doubles for the trait abstractions.

use std::sync::Mutex;

use crate::traits::{LocationError, LocationStore};

/// In-memory location store for tests.
///
/// Holds the query string behind a mutex so tests can hand the store to
/// the app and still inspect what was written.
#[derive(Debug, Default)]
pub struct InMemoryLocation {
    query: Mutex<Option<String>>,
}

impl InMemoryLocation {
    /// Empty store, as on a first launch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a query string, as when a deep link was saved by
    /// an earlier session.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Mutex::new(Some(query.into())),
        }
    }

    /// The most recently written query string.
    pub fn current(&self) -> Option<String> {
        self.query.lock().expect("location mutex poisoned").clone()
    }
}

impl LocationStore for InMemoryLocation {
    fn read(&self) -> Result<Option<String>, LocationError> {
        Ok(self.current())
    }

    fn replace(&self, query: &str) -> Result<(), LocationError> {
        *self.query.lock().expect("location mutex poisoned") = Some(query.to_string());
        Ok(())
    }
}
