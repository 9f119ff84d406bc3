//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`FetchState`] - Where the list fetch state machine currently is
//! - [`Focus`] - Which UI component has focus
//! - [`DetailOverlay`] - Game detail popup state

use crate::models::Game;

/// The list fetch state machine.
///
/// Every triggering event (startup, filter change, page change, page-size
/// change, sort change, manual refresh) moves to `Loading` regardless of
/// the prior state; a fetch completion moves to `Loaded` or `Failed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// No fetch has been issued yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch succeeded and the list is current
    Loaded,
    /// The last fetch failed; the message is shown in place of the list
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The failure message, when in the failed state.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The game list itself
    #[default]
    List,
    /// The publisher filter picker overlay
    PublisherPicker,
    /// The category filter picker overlay
    CategoryPicker,
}

/// Game detail popup state (Enter on a row to open)
#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    /// Whether the popup is visible
    pub visible: bool,
    /// Fetch in flight for the popup
    pub loading: bool,
    /// The loaded game, once the detail fetch succeeds
    pub game: Option<Game>,
    /// Inline error shown in the popup; never disturbs the list state
    pub error: Option<String>,
}

impl DetailOverlay {
    /// Open the popup in its loading state.
    pub fn open(&mut self) {
        self.visible = true;
        self.loading = true;
        self.game = None;
        self.error = None;
    }

    /// Close and clear the popup.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}
