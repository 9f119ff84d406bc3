//! UI rendering for the catalog browser.
//!
//! Layout, top to bottom: header (title + active filters + sort), the
//! game list, the pagination bar, and a key-hint footer. Pickers and the
//! detail popup render as overlays on top.

mod detail;
mod filter_picker;
mod game_list;
mod pagination_bar;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_FILTER, COLOR_HEADER};

/// Draw one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(3),    // game list
            Constraint::Length(1), // pagination bar
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    game_list::render(frame, chunks[1], app);
    pagination_bar::render(frame, chunks[2], app);
    render_footer(frame, chunks[3]);

    if app.focus != Focus::List {
        filter_picker::render(frame, area, app);
    }
    detail::render(frame, area, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "gamedeck",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];

    let mut tags: Vec<String> = Vec::new();
    if let Some(id) = app.filters.publisher_id {
        tags.push(format!("publisher: {}", option_name(&app.publishers, id)));
    }
    if let Some(id) = app.filters.category_id {
        tags.push(format!("category: {}", option_name(&app.categories, id)));
    }
    if !tags.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            tags.join("  "),
            Style::default().fg(COLOR_FILTER),
        ));
    }
    if !app.sort.is_default() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("sort: {} {}", app.sort.field.label(), app.sort.order.as_str()),
            Style::default().fg(COLOR_ACCENT),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Resolve a filter id to its display name, falling back to the raw id
/// while reference data has not loaded.
fn option_name(options: &[crate::models::CatalogOption], id: i64) -> String {
    options
        .iter()
        .find(|o| o.id == id)
        .map(|o| o.name.clone())
        .unwrap_or_else(|| format!("#{}", id))
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = "←/→ page · z size · p/c filter · x clear · s/o sort · ↵ detail · r refresh · q quit";
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(COLOR_DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
