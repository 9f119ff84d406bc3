//! Catalog API client for backend communication.
//!
//! This module provides the HTTP client for the games catalog backend:
//! the paginated, filterable collection endpoint, the single-game detail
//! endpoint, and the publisher/category reference-data endpoints.

use reqwest::Client;

use crate::models::{CatalogOption, Game, GameListResponse};

/// Default base URL for the catalog API.
pub const CATALOG_BASE_URL: &str = "http://localhost:5000";

/// Error type for catalog client operations.
#[derive(Debug)]
pub enum CatalogError {
    /// HTTP request failed at the transport level
    Http(reqwest::Error),
    /// JSON deserialization failed
    Json(serde_json::Error),
    /// Server returned an error status
    ServerError { status: u16, status_text: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Http(e) => write!(f, "request failed: {}", e),
            CatalogError::Json(e) => write!(f, "unexpected response body: {}", e),
            CatalogError::ServerError {
                status,
                status_text,
            } => {
                write!(f, "server returned HTTP {} {}", status, status_text)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Http(e) => Some(e),
            CatalogError::Json(e) => Some(e),
            CatalogError::ServerError { .. } => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        CatalogError::Http(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Json(e)
    }
}

/// Client for the games catalog API.
///
/// Cheap to clone; spawned fetch tasks each take their own copy.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// Base URL for the catalog API
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl CatalogClient {
    /// Create a new client with the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(CATALOG_BASE_URL)
    }

    /// Create a new client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Fetch a page of games.
    ///
    /// `query` is the ready-built query string (filters, sort, page,
    /// per_page); empty means server defaults.
    pub async fn list_games(&self, query: &str) -> Result<GameListResponse, CatalogError> {
        let url = if query.is_empty() {
            format!("{}/api/games", self.base_url)
        } else {
            format!("{}/api/games?{}", self.base_url, query)
        };
        self.get_json(&url).await
    }

    /// Fetch a single game by id.
    pub async fn get_game(&self, id: i64) -> Result<Game, CatalogError> {
        let url = format!("{}/api/games/{}", self.base_url, id);
        self.get_json(&url).await
    }

    /// Fetch all publishers for the filter picker.
    pub async fn list_publishers(&self) -> Result<Vec<CatalogOption>, CatalogError> {
        let url = format!("{}/api/publishers", self.base_url);
        self.get_json(&url).await
    }

    /// Fetch all categories for the filter picker.
    pub async fn list_categories(&self) -> Result<Vec<CatalogOption>, CatalogError> {
        let url = format!("{}/api/categories", self.base_url);
        self.get_json(&url).await
    }

    /// GET `url` and deserialize a JSON body, mapping non-2xx statuses to
    /// [`CatalogError::ServerError`].
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        tracing::debug!(url, "catalog request");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::ServerError {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
