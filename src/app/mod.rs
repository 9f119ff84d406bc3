//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct: the stores (filters,
//! sort, pagination, game rows, reference data), the fetch state machine,
//! and the location write-back that keeps the persisted deep link in step
//! with what the server confirmed.

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{DetailOverlay, FetchState, Focus};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::browse::{
    BrowseLocation, FilterSelection, PaginationState, SortSelection,
};
use crate::catalog::CatalogClient;
use crate::models::{CatalogOption, GameRow};
use crate::traits::LocationStore;

/// Main application state.
///
/// All mutation happens on the event loop task; spawned fetches report
/// back through the message channel.
pub struct App {
    /// Catalog API client, cloned into spawned fetch tasks
    pub client: CatalogClient,
    /// Persisted deep-link store (the address bar of the TUI)
    pub location: Arc<dyn LocationStore>,
    /// Current filter selection
    pub filters: FilterSelection,
    /// Current sort selection
    pub sort: SortSelection,
    /// Pagination state; totals are server-authoritative
    pub pagination: PaginationState,
    /// Flattened, render-ready rows; replaced wholesale on every success
    pub games: Vec<GameRow>,
    /// Where the list fetch state machine currently is
    pub fetch_state: FetchState,
    /// Publisher reference data for the picker; empty until loaded
    pub publishers: Vec<CatalogOption>,
    /// Category reference data for the picker; empty until loaded
    pub categories: Vec<CatalogOption>,
    /// Which component has focus
    pub focus: Focus,
    /// Selected row in the game list
    pub selected_row: usize,
    /// Selected index inside the active picker (0 = "All")
    pub picker_index: usize,
    /// Game detail popup state
    pub detail: DetailOverlay,
    /// Set when the user asks to quit
    pub should_quit: bool,
    /// Monotonic fetch sequence; completions for older values are stale
    fetch_seq: u64,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create a new App around a client, a location store and the sending
    /// half of the message channel.
    pub fn new(
        client: CatalogClient,
        location: Arc<dyn LocationStore>,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            client,
            location,
            filters: FilterSelection::default(),
            sort: SortSelection::default(),
            pagination: PaginationState::default(),
            games: Vec::new(),
            fetch_state: FetchState::Idle,
            publishers: Vec::new(),
            categories: Vec::new(),
            focus: Focus::List,
            selected_row: 0,
            picker_index: 0,
            detail: DetailOverlay::default(),
            should_quit: false,
            fetch_seq: 0,
            message_tx,
        }
    }

    /// Initialize state from a deep link and kick off the first fetches.
    ///
    /// `link` (from the command line) takes precedence over the stored
    /// location; with neither, defaults apply. Reference data loads in
    /// parallel with the first list fetch and its failures never block it.
    pub fn start(&mut self, link: Option<&str>) {
        let stored = match self.location.read() {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("failed to read stored location: {}", e);
                None
            }
        };
        let query = link.map(str::to_string).or(stored).unwrap_or_default();
        self.restore_location(&BrowseLocation::parse(&query));
        self.load_reference_data();
        self.refresh();
    }

    /// Apply a parsed location to the stores (requested page/per-page
    /// included; totals stay unknown until the server answers).
    fn restore_location(&mut self, location: &BrowseLocation) {
        self.filters = location.filters;
        self.sort = location.sort;
        self.pagination.page = location.page;
        self.pagination.per_page = location.per_page;
    }

    /// The canonical query string for the current state, used both for
    /// the collection request and the persisted location.
    pub fn current_query(&self) -> String {
        BrowseLocation {
            filters: self.filters,
            sort: self.sort,
            page: self.pagination.page,
            per_page: self.pagination.per_page,
        }
        .to_query_string()
    }

    /// Issue a list fetch for the current state.
    ///
    /// Unconditionally enters `Loading`, whatever the prior state, and
    /// bumps the sequence number so any fetch still in flight becomes
    /// stale.
    pub fn refresh(&mut self) {
        self.fetch_state = FetchState::Loading;
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        let query = self.current_query();
        let client = self.client.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.list_games(&query).await {
                Ok(response) => {
                    let _ = tx.send(AppMessage::GamesLoaded { seq, response });
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::GamesFailed {
                        seq,
                        message: e.to_string(),
                    });
                }
            }
        });
    }

    /// Fetch publishers and categories once, in the background.
    ///
    /// Failures are logged and the corresponding picker stays empty; the
    /// primary list fetch is unaffected.
    pub fn load_reference_data(&self) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match client.list_publishers().await {
                Ok(publishers) => {
                    let _ = tx.send(AppMessage::PublishersLoaded(publishers));
                }
                Err(e) => tracing::warn!("failed to load publishers: {}", e),
            }
        });

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match client.list_categories().await {
                Ok(categories) => {
                    let _ = tx.send(AppMessage::CategoriesLoaded(categories));
                }
                Err(e) => tracing::warn!("failed to load categories: {}", e),
            }
        });
    }

    /// Apply a message from a spawned task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::GamesLoaded { seq, response } => {
                if seq != self.fetch_seq {
                    tracing::debug!(seq, current = self.fetch_seq, "discarding stale list result");
                    return;
                }
                self.games = response.games.into_iter().map(GameRow::from).collect();
                // The server may have clamped the requested page; its
                // metadata replaces ours entirely.
                self.pagination.apply(&response.pagination);
                if self.selected_row >= self.games.len() {
                    self.selected_row = self.games.len().saturating_sub(1);
                }
                self.fetch_state = FetchState::Loaded;
                self.write_location();
            }
            AppMessage::GamesFailed { seq, message } => {
                if seq != self.fetch_seq {
                    tracing::debug!(seq, current = self.fetch_seq, "discarding stale list error");
                    return;
                }
                tracing::warn!("list fetch failed: {}", message);
                // The error state replaces the list; stale rows must not
                // linger under the banner.
                self.games.clear();
                self.selected_row = 0;
                self.fetch_state = FetchState::Failed(message);
            }
            AppMessage::PublishersLoaded(publishers) => {
                self.publishers = publishers;
            }
            AppMessage::CategoriesLoaded(categories) => {
                self.categories = categories;
            }
            AppMessage::DetailLoaded(game) => {
                if self.detail.visible {
                    self.detail.loading = false;
                    self.detail.game = Some(*game);
                }
            }
            AppMessage::DetailFailed(message) => {
                if self.detail.visible {
                    self.detail.loading = false;
                    self.detail.error = Some(message);
                }
            }
        }
    }

    /// Persist the server-confirmed state as the new location.
    fn write_location(&self) {
        let query = self.current_query();
        if let Err(e) = self.location.replace(&query) {
            tracing::warn!("failed to persist location: {}", e);
        }
    }

    /// Jump to `requested`, a no-op when it equals the current page or
    /// falls outside `[1, total_pages]`. Filters and page size are left
    /// unchanged.
    pub fn change_page(&mut self, requested: u64) {
        if requested == self.pagination.page
            || requested < 1
            || requested > self.pagination.total_pages
        {
            return;
        }
        self.pagination.page = requested;
        self.refresh();
    }

    pub fn next_page(&mut self) {
        if self.pagination.can_go_next() {
            self.change_page(self.pagination.page + 1);
        }
    }

    pub fn previous_page(&mut self) {
        if self.pagination.can_go_previous() {
            self.change_page(self.pagination.page - 1);
        }
    }

    pub fn first_page(&mut self) {
        self.change_page(1);
    }

    pub fn last_page(&mut self) {
        self.change_page(self.pagination.total_pages);
    }

    /// Switch to a new page size from the fixed set and restart at page 1.
    pub fn change_page_size(&mut self, size: u64) {
        if !PaginationState::is_valid_page_size(size) {
            return;
        }
        self.pagination.per_page = size;
        self.pagination.page = 1;
        self.refresh();
    }

    /// Cycle to the next offered page size.
    pub fn cycle_page_size(&mut self) {
        self.change_page_size(self.pagination.next_page_size());
    }

    /// Set or clear the category filter; always restarts at page 1 so the
    /// user never lands on a page that no longer exists under the filter.
    pub fn set_category(&mut self, id: Option<i64>) {
        self.filters.category_id = id;
        self.pagination.page = 1;
        self.refresh();
    }

    /// Set or clear the publisher filter; always restarts at page 1.
    pub fn set_publisher(&mut self, id: Option<i64>) {
        self.filters.publisher_id = id;
        self.pagination.page = 1;
        self.refresh();
    }

    /// Reset both filter dimensions and restart at page 1.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.pagination.page = 1;
        self.refresh();
    }

    /// Cycle the sort field, restarting at page 1.
    pub fn cycle_sort_field(&mut self) {
        self.sort.field = self.sort.field.next();
        self.pagination.page = 1;
        self.refresh();
    }

    /// Flip the sort direction, restarting at page 1.
    pub fn toggle_sort_order(&mut self) {
        self.sort.order = self.sort.order.toggled();
        self.pagination.page = 1;
        self.refresh();
    }

    /// Open the detail popup for the selected row and fetch the full game.
    pub fn open_detail(&mut self) {
        let Some(row) = self.games.get(self.selected_row) else {
            return;
        };
        let id = row.id;
        self.detail.open();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match client.get_game(id).await {
                Ok(game) => {
                    let _ = tx.send(AppMessage::DetailLoaded(Box::new(game)));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::DetailFailed(e.to_string()));
                }
            }
        });
    }

    #[cfg(test)]
    pub(crate) fn fetch_seq(&self) -> u64 {
        self.fetch_seq
    }
}
