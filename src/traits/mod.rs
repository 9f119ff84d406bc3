//! Trait abstractions for external resources.
//!
//! The location store is the one resource outside the component tree; it
//! is injected as a port so the sync logic is testable without touching
//! the filesystem.

pub mod location;

pub use location::{LocationError, LocationStore};
