//! AppMessage enum for async communication within the application.

use crate::models::{CatalogOption, Game, GameListResponse};

/// Messages received from spawned fetch tasks.
///
/// List results carry the fetch sequence number they were issued with so
/// the app can discard completions from superseded fetches.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A page of games arrived
    GamesLoaded { seq: u64, response: GameListResponse },
    /// The list fetch failed (transport, decode, or HTTP status)
    GamesFailed { seq: u64, message: String },
    /// Publisher reference data arrived
    PublishersLoaded(Vec<CatalogOption>),
    /// Category reference data arrived
    CategoriesLoaded(Vec<CatalogOption>),
    /// A game detail fetch finished, for the detail overlay
    DetailLoaded(Box<Game>),
    /// A game detail fetch failed, surfaced inline in the overlay
    DetailFailed(String),
}
