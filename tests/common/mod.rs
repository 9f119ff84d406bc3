//! Shared fixtures for the integration tests.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build one game object in the wire shape, with optional nested
/// publisher/category and rating.
pub fn game_json(
    id: i64,
    title: &str,
    publisher: Option<(i64, &str)>,
    category: Option<(i64, &str)>,
    star_rating: Option<f64>,
) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("Description of {}", title),
        "publisher": publisher.map(|(id, name)| json!({"id": id, "name": name})),
        "category": category.map(|(id, name)| json!({"id": id, "name": name})),
        "starRating": star_rating,
    })
}

/// Build a collection response body, computing the pagination metadata the
/// way the server does.
pub fn list_body(games: Vec<Value>, page: u64, per_page: u64, total_items: u64) -> Value {
    let total_pages = if total_items == 0 {
        1
    } else {
        total_items.div_ceil(per_page)
    };
    json!({
        "games": games,
        "pagination": {
            "page": page,
            "per_page": per_page,
            "total_items": total_items,
            "total_pages": total_pages,
            "has_next": page < total_pages,
            "has_previous": page > 1,
        }
    })
}

/// Mount a catch-all games mock returning `body`.
pub async fn mount_games(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount the reference-data endpoints with a couple of options each.
pub async fn mount_reference_data(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/publishers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "name": "Leder Games"},
            {"id": 11, "name": "Stonemaier"},
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "Strategy"},
            {"id": 3, "name": "Party"},
        ])))
        .mount(server)
        .await;
}
