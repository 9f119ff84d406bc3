//! Pagination bar component
//!
//! Renders the windowed page numbers with the current page highlighted,
//! ellipsis markers for the gaps, and the "Showing X-Y of Z" range.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::browse::PageEntry;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_SELECTED};

/// Render the pagination bar: pages on the left, showing-range on the right.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if area.height < 1 {
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let pages = Paragraph::new(page_line(app)).alignment(Alignment::Left);
    frame.render_widget(pages, halves[0]);

    let range = Paragraph::new(range_line(app)).alignment(Alignment::Right);
    frame.render_widget(range, halves[1]);
}

fn page_line(app: &App) -> Line<'static> {
    let mut spans: Vec<Span> = vec![Span::styled(
        "‹ ".to_string(),
        arrow_style(app.pagination.can_go_previous()),
    )];

    for entry in app.pagination.window() {
        match entry {
            PageEntry::Page(page) => {
                let style = if page == app.pagination.page {
                    Style::default()
                        .fg(COLOR_SELECTED)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(COLOR_ACCENT)
                };
                spans.push(Span::styled(format!("{} ", page), style));
            }
            PageEntry::Ellipsis => {
                spans.push(Span::styled("… ".to_string(), Style::default().fg(COLOR_DIM)));
            }
        }
    }

    spans.push(Span::styled(
        "›".to_string(),
        arrow_style(app.pagination.can_go_next()),
    ));
    Line::from(spans)
}

fn arrow_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    }
}

fn range_line(app: &App) -> Line<'static> {
    let (start, end) = app.pagination.showing_range();
    let text = if app.pagination.total_items == 0 {
        format!("0 of 0 · {}/page", app.pagination.per_page)
    } else {
        format!(
            "Showing {}-{} of {} · {}/page",
            start, end, app.pagination.total_items, app.pagination.per_page
        )
    };
    Line::from(Span::styled(text, Style::default().fg(COLOR_DIM)))
}
