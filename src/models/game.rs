use serde::{Deserialize, Serialize};

/// Nested publisher/category reference as the API sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiRef {
    pub id: i64,
    pub name: String,
}

/// A game as returned by the collection and detail endpoints.
///
/// Publisher and category arrive as nested objects or `null`; the star
/// rating is omitted entirely for unrated games. All three stay optional
/// here and are flattened once, at the fetch boundary, into [`GameRow`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Publisher sub-object, absent when the game has none
    #[serde(default)]
    pub publisher: Option<ApiRef>,
    /// Category sub-object, absent when the game has none
    #[serde(default)]
    pub category: Option<ApiRef>,
    /// Star rating 0-5; `None` means "not rated", which is not the same as zero
    #[serde(default, rename = "starRating")]
    pub star_rating: Option<f64>,
}

/// Pagination metadata block returned alongside every game list.
///
/// These fields are authoritative: after a successful fetch the client
/// adopts them wholesale and never recomputes totals locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Response from the collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameListResponse {
    pub games: Vec<Game>,
    pub pagination: PaginationMeta,
}

/// Render-ready game row with nested objects flattened to plain names.
///
/// Absent publisher/category yield `None` rather than placeholder text,
/// so the UI can simply omit the tag.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub publisher_name: Option<String>,
    pub category_name: Option<String>,
    pub star_rating: Option<f64>,
}

impl From<Game> for GameRow {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            title: game.title,
            description: game.description,
            publisher_name: game.publisher.map(|p| p.name),
            category_name: game.category.map(|c| c.name),
            star_rating: game.star_rating,
        }
    }
}
