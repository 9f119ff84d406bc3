//! Game detail overlay
//!
//! A centered popup showing the full record for one game. Loading and
//! failure are rendered inside the popup; the list behind it is never
//! disturbed.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::Game;
use crate::ui::centered_rect;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_LOADING, COLOR_RATING};

/// Render the detail popup when visible.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if !app.detail.visible {
        return;
    }

    let popup = centered_rect(area, 60, 14);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Game ", Style::default().fg(COLOR_HEADER)));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = if app.detail.loading {
        vec![Line::from(Span::styled(
            "Loading…",
            Style::default().fg(COLOR_LOADING),
        ))]
    } else if let Some(error) = &app.detail.error {
        vec![Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_ERROR),
        ))]
    } else if let Some(game) = &app.detail.game {
        detail_lines(game)
    } else {
        Vec::new()
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn detail_lines(game: &Game) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        game.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    // Tags render only for the data the record actually has.
    let mut tags: Vec<String> = Vec::new();
    if let Some(publisher) = &game.publisher {
        tags.push(publisher.name.clone());
    }
    if let Some(category) = &game.category {
        tags.push(category.name.clone());
    }
    if !tags.is_empty() {
        lines.push(Line::from(Span::styled(
            tags.join(" · "),
            Style::default().fg(COLOR_DIM),
        )));
    }
    if let Some(stars) = game.star_rating {
        lines.push(Line::from(Span::styled(
            format!("{:.1}★", stars),
            Style::default().fg(COLOR_RATING),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(game.description.clone()));
    lines
}
