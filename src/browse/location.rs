//! Deep-link query-string parsing and serialization.
//!
//! A browse location is the full shareable state of the list view:
//! filters, sort, page and page size, encoded as a percent-encoded query
//! string (`category_id=2&page=3&per_page=50`). The same encoding is used
//! for the collection request and for the persisted location, so writing
//! and re-reading a location always reproduces the state that produced it.

use super::filters::{FilterSelection, SortField, SortOrder, SortSelection};
use super::pagination::{PaginationState, DEFAULT_PAGE_SIZE};

/// Parsed deep-link state: filters, sort, and the requested page/per-page.
///
/// "Requested" because totals are unknown until the server answers; the
/// page may be clamped by the server on the first fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseLocation {
    pub filters: FilterSelection,
    pub sort: SortSelection,
    pub page: u64,
    pub per_page: u64,
}

impl Default for BrowseLocation {
    fn default() -> Self {
        Self {
            filters: FilterSelection::default(),
            sort: SortSelection::default(),
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl BrowseLocation {
    /// Parse a query string, falling back to defaults for anything absent
    /// or invalid.
    ///
    /// Recovery rules: filters become unset on a bad id, `page` becomes 1
    /// on a bad or non-positive value, `per_page` keeps the default unless
    /// the value is one of the offered page sizes, and unknown sort/order
    /// values fall back to the server default.
    pub fn parse(query: &str) -> Self {
        let mut location = Self::default();

        for pair in query.trim().trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, value),
                None => (pair, ""),
            };
            let value = match urlencoding::decode(value) {
                Ok(decoded) => decoded,
                Err(_) => {
                    tracing::warn!(key, value, "undecodable location parameter, ignoring");
                    continue;
                }
            };

            match key {
                "category_id" => location.filters.category_id = parse_filter_id(key, &value),
                "publisher_id" => location.filters.publisher_id = parse_filter_id(key, &value),
                "page" => {
                    location.page = match value.parse::<u64>() {
                        Ok(page) if page >= 1 => page,
                        _ => 1,
                    };
                }
                "per_page" => {
                    if let Ok(size) = value.parse::<u64>() {
                        if PaginationState::is_valid_page_size(size) {
                            location.per_page = size;
                        }
                    }
                }
                "sort" => {
                    if let Some(field) = SortField::parse(&value) {
                        location.sort.field = field;
                    }
                }
                "order" => {
                    if let Some(order) = SortOrder::parse(&value) {
                        location.sort.order = order;
                    }
                }
                _ => {}
            }
        }

        location
    }

    /// Serialize to a query string.
    ///
    /// Unset filters and the default sort are omitted entirely, so "no
    /// filter" never appears as an empty parameter; `page` and `per_page`
    /// are always present.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        if let Some(id) = self.filters.category_id {
            pairs.push(format!("category_id={}", id));
        }
        if let Some(id) = self.filters.publisher_id {
            pairs.push(format!("publisher_id={}", id));
        }
        if !self.sort.is_default() {
            pairs.push(format!(
                "sort={}",
                urlencoding::encode(self.sort.field.as_str())
            ));
            pairs.push(format!(
                "order={}",
                urlencoding::encode(self.sort.order.as_str())
            ));
        }
        pairs.push(format!("page={}", self.page));
        pairs.push(format!("per_page={}", self.per_page));

        pairs.join("&")
    }
}

fn parse_filter_id(key: &str, value: &str) -> Option<i64> {
    if value.is_empty() {
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!(key, value, "unparseable filter id in location, treating as unset");
            None
        }
    }
}
