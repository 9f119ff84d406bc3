//! End-to-end tests for the list controller against a mock catalog server.
//!
//! These drive the real fetch path: App builds the query, the client hits
//! wiremock, and the completion message flows back through
//! `handle_message` exactly as it would from the event loop.

mod common;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gamedeck::adapters::InMemoryLocation;
use gamedeck::app::{App, AppMessage, FetchState};
use gamedeck::catalog::CatalogClient;

use common::{game_json, list_body, mount_games, mount_reference_data};

fn build_app(
    server: &MockServer,
    location: Arc<InMemoryLocation>,
) -> (App, mpsc::UnboundedReceiver<AppMessage>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(
        CatalogClient::with_base_url(server.uri()),
        location,
        tx,
    );
    (app, rx)
}

async fn recv(rx: &mut mpsc::UnboundedReceiver<AppMessage>) -> AppMessage {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for a fetch message")
        .expect("message channel closed")
}

/// Pump messages until the list fetch settles in `Loaded` or `Failed`.
async fn settle_list(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppMessage>) {
    while !matches!(app.fetch_state, FetchState::Loaded | FetchState::Failed(_)) {
        let message = recv(rx).await;
        app.handle_message(message);
    }
}

#[tokio::test]
async fn test_initial_fetch_builds_default_query_and_flattens_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            vec![
                game_json(1, "Root", Some((10, "Leder Games")), Some((2, "Strategy")), Some(4.5)),
                game_json(2, "Mystery Proto", None, None, None),
            ],
            1,
            20,
            2,
        )))
        .mount(&server)
        .await;
    mount_reference_data(&server).await;

    let location = Arc::new(InMemoryLocation::new());
    let (mut app, mut rx) = build_app(&server, location.clone());
    app.start(None);
    settle_list(&mut app, &mut rx).await;

    assert_eq!(app.fetch_state, FetchState::Loaded);
    assert_eq!(app.games.len(), 2);
    assert_eq!(app.games[0].publisher_name.as_deref(), Some("Leder Games"));
    assert_eq!(app.games[0].star_rating, Some(4.5));
    assert!(app.games[1].publisher_name.is_none());
    assert!(app.games[1].star_rating.is_none());
    assert_eq!(app.pagination.total_items, 2);
    assert_eq!(
        location.current().as_deref(),
        Some("page=1&per_page=20"),
        "confirmed state is persisted after the fetch"
    );
}

#[tokio::test]
async fn test_filter_pick_requests_filtered_first_page() {
    let server = MockServer::start().await;
    // Unfiltered page 3 for the initial fetch.
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            vec![game_json(40, "Page Three Game", None, None, None)],
            3,
            20,
            95,
        )))
        .mount(&server)
        .await;
    // Filtered page 1 after the pick.
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .and(query_param("category_id", "2"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            vec![game_json(1, "Root", None, Some((2, "Strategy")), None)],
            1,
            20,
            1,
        )))
        .mount(&server)
        .await;

    let location = Arc::new(InMemoryLocation::with_query("page=3&per_page=20"));
    let (mut app, mut rx) = build_app(&server, location.clone());
    app.start(None);
    settle_list(&mut app, &mut rx).await;
    assert_eq!(app.pagination.page, 3);

    app.set_category(Some(2));
    assert!(app.fetch_state.is_loading());
    settle_list(&mut app, &mut rx).await;

    assert_eq!(app.games[0].title, "Root");
    assert_eq!(app.pagination.page, 1);
    assert_eq!(
        location.current().as_deref(),
        Some("category_id=2&page=1&per_page=20")
    );
}

#[tokio::test]
async fn test_clear_filters_drops_filter_keys_from_request() {
    let server = MockServer::start().await;
    mount_games(
        &server,
        list_body(vec![game_json(1, "Azul", None, None, None)], 1, 20, 1),
    )
    .await;

    let location = Arc::new(InMemoryLocation::with_query(
        "category_id=2&publisher_id=7&page=4&per_page=20",
    ));
    let (mut app, mut rx) = build_app(&server, location.clone());
    app.start(None);
    settle_list(&mut app, &mut rx).await;

    app.clear_filters();
    settle_list(&mut app, &mut rx).await;

    let requests = server.received_requests().await.expect("requests recorded");
    let last_list_request = requests
        .iter()
        .filter(|r| r.url.path() == "/api/games")
        .next_back()
        .expect("a list request was made");
    let query = last_list_request.url.query().unwrap_or("");
    assert!(!query.contains("category_id"));
    assert!(!query.contains("publisher_id"));
    assert!(query.contains("page=1"));

    let persisted = location.current().unwrap();
    assert!(!persisted.contains("category_id"));
    assert!(!persisted.contains("publisher_id"));
}

#[tokio::test]
async fn test_server_clamped_page_is_adopted_and_persisted() {
    let server = MockServer::start().await;
    // Whatever page is requested, the server answers with its last page.
    mount_games(
        &server,
        list_body(
            vec![game_json(95, "Last Game", None, None, None)],
            5,
            20,
            95,
        ),
    )
    .await;

    let location = Arc::new(InMemoryLocation::with_query("page=99&per_page=20"));
    let (mut app, mut rx) = build_app(&server, location.clone());
    app.start(None);
    settle_list(&mut app, &mut rx).await;

    assert_eq!(app.pagination.page, 5, "client adopts the clamped page");
    assert!(!app.pagination.can_go_next());
    assert_eq!(
        location.current().as_deref(),
        Some("page=5&per_page=20"),
        "the corrected page is what gets persisted"
    );
}

#[tokio::test]
async fn test_http_error_fails_fetch_and_clears_rows() {
    let server = MockServer::start().await;
    // First fetch succeeds, second hits a dying server.
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            vec![game_json(1, "Azul", None, None, None)],
            1,
            20,
            1,
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (mut app, mut rx) = build_app(&server, Arc::new(InMemoryLocation::new()));
    app.start(None);
    settle_list(&mut app, &mut rx).await;
    assert_eq!(app.games.len(), 1);

    app.refresh();
    settle_list(&mut app, &mut rx).await;

    let error = app.fetch_state.error().expect("fetch should have failed");
    assert!(error.contains("500"), "message embeds the status: {}", error);
    assert!(
        app.games.is_empty(),
        "stale rows must not survive into the error state"
    );
}

#[tokio::test]
async fn test_malformed_body_fails_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let (mut app, mut rx) = build_app(&server, Arc::new(InMemoryLocation::new()));
    app.start(None);
    settle_list(&mut app, &mut rx).await;

    let error = app.fetch_state.error().expect("fetch should have failed");
    assert!(error.contains("unexpected response body"));
}

#[tokio::test]
async fn test_overlapping_fetches_last_issued_wins() {
    let server = MockServer::start().await;
    // The first pick answers slowly, the second immediately; the slow
    // response arrives last but must not win.
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .and(query_param("category_id", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_body(
                    vec![game_json(1, "Slow Answer", None, None, None)],
                    1,
                    20,
                    1,
                ))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/games"))
        .and(query_param("category_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
            vec![game_json(2, "Fast Answer", None, None, None)],
            1,
            20,
            1,
        )))
        .mount(&server)
        .await;

    let (mut app, mut rx) = build_app(&server, Arc::new(InMemoryLocation::new()));
    app.set_category(Some(1));
    app.set_category(Some(2));

    // Two completions flow back: the fast one settles the fetch, the
    // late one is stale and must be ignored.
    settle_list(&mut app, &mut rx).await;
    assert_eq!(app.games[0].title, "Fast Answer");

    let late = recv(&mut rx).await;
    app.handle_message(late);
    assert_eq!(app.fetch_state, FetchState::Loaded);
    assert_eq!(
        app.games[0].title, "Fast Answer",
        "late completion of a superseded fetch must not overwrite the list"
    );
}

#[tokio::test]
async fn test_reference_data_failure_leaves_picker_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/publishers"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"id": 2, "name": "Strategy"}])),
        )
        .mount(&server)
        .await;

    let (mut app, mut rx) = build_app(&server, Arc::new(InMemoryLocation::new()));
    app.load_reference_data();

    // Only the categories fetch produces a message.
    let message = recv(&mut rx).await;
    app.handle_message(message);

    assert_eq!(app.categories.len(), 1);
    assert!(app.publishers.is_empty());
    assert!(
        tokio::time::timeout(Duration::from_millis(300), rx.recv())
            .await
            .is_err(),
        "the failed publishers fetch must not send a message"
    );
}

#[tokio::test]
async fn test_detail_fetch_populates_overlay() {
    let server = MockServer::start().await;
    mount_games(
        &server,
        list_body(
            vec![game_json(7, "Gloomhaven", Some((10, "Cephalofair")), None, Some(4.8))],
            1,
            20,
            1,
        ),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/games/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(game_json(
            7,
            "Gloomhaven",
            Some((10, "Cephalofair")),
            Some((2, "Strategy")),
            Some(4.8),
        )))
        .mount(&server)
        .await;

    let (mut app, mut rx) = build_app(&server, Arc::new(InMemoryLocation::new()));
    app.start(None);
    settle_list(&mut app, &mut rx).await;

    app.open_detail();
    assert!(app.detail.visible && app.detail.loading);
    let message = recv(&mut rx).await;
    app.handle_message(message);

    assert!(!app.detail.loading);
    let game = app.detail.game.as_ref().expect("detail loaded");
    assert_eq!(game.title, "Gloomhaven");
    assert_eq!(app.games.len(), 1, "list state is untouched by the detail fetch");
}

#[tokio::test]
async fn test_detail_fetch_404_shows_inline_error() {
    let server = MockServer::start().await;
    mount_games(
        &server,
        list_body(vec![game_json(9, "Ghost Game", None, None, None)], 1, 20, 1),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/games/9"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"error": "Game not found"})),
        )
        .mount(&server)
        .await;

    let (mut app, mut rx) = build_app(&server, Arc::new(InMemoryLocation::new()));
    app.start(None);
    settle_list(&mut app, &mut rx).await;

    app.open_detail();
    let message = recv(&mut rx).await;
    app.handle_message(message);

    let error = app.detail.error.as_ref().expect("inline error set");
    assert!(error.contains("404"));
    assert_eq!(app.fetch_state, FetchState::Loaded, "list state unaffected");
}
