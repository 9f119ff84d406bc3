//! Color theme constants for the gamedeck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Selected row / current page highlight
pub const COLOR_SELECTED: Color = Color::LightCyan;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error banner text
pub const COLOR_ERROR: Color = Color::LightRed;

/// Loading indicator text
pub const COLOR_LOADING: Color = Color::Yellow;

/// Star-rating tint
pub const COLOR_RATING: Color = Color::Yellow;

/// Active filter tag tint
pub const COLOR_FILTER: Color = Color::LightGreen;
