use serde::{Deserialize, Serialize};

/// A publisher or category as served by the reference-data endpoints.
///
/// Fetched once at startup and treated as read-mostly reference data for
/// the filter pickers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogOption {
    pub id: i64,
    pub name: String,
}
