//! Data models for the catalog API.
//!
//! Wire shapes mirror the server's JSON exactly (nested optional
//! publisher/category objects, camelCase `starRating`); the flattened
//! [`GameRow`] is what the UI renders.

mod catalog;
mod game;

pub use catalog::CatalogOption;
pub use game::{ApiRef, Game, GameListResponse, GameRow, PaginationMeta};
