//! Game list component
//!
//! Renders the fetched rows as a table, or the loading/error/empty state
//! that replaces it. Failed fetches suppress the list entirely; there are
//! never stale rows under an error banner.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, FetchState};
use crate::models::GameRow;
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_LOADING, COLOR_RATING,
    COLOR_SELECTED,
};

/// Minimum height to render anything useful
const MIN_HEIGHT: u16 = 3;

/// Render the game list area.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if area.height < MIN_HEIGHT {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Games ");

    match &app.fetch_state {
        FetchState::Loading => {
            render_message(frame, area, block, "Loading…", COLOR_LOADING);
        }
        FetchState::Failed(message) => {
            render_message(frame, area, block, message, COLOR_ERROR);
        }
        FetchState::Idle => {
            render_message(frame, area, block, "", COLOR_DIM);
        }
        FetchState::Loaded => {
            if app.games.is_empty() {
                render_message(
                    frame,
                    area,
                    block,
                    "No games match the current filters.",
                    COLOR_DIM,
                );
            } else {
                render_table(frame, area, block, app);
            }
        }
    }
}

fn render_message(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    message: &str,
    color: ratatui::style::Color,
) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(paragraph, area);
}

fn render_table(frame: &mut Frame, area: Rect, block: Block, app: &App) {
    let header = Row::new(vec![
        Cell::from("Title"),
        Cell::from("Publisher"),
        Cell::from("Category"),
        Cell::from("Rating"),
    ])
    .style(
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .games
        .iter()
        .enumerate()
        .map(|(index, game)| game_row(game, index == app.selected_row, area.width))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(10),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn game_row<'a>(game: &'a GameRow, selected: bool, width: u16) -> Row<'a> {
    let (base, tint, rating_tint) = if selected {
        let highlighted = Style::default()
            .fg(COLOR_SELECTED)
            .add_modifier(Modifier::BOLD);
        (highlighted, highlighted, highlighted)
    } else {
        (
            Style::default(),
            Style::default().fg(COLOR_DIM),
            Style::default().fg(COLOR_RATING),
        )
    };

    // Absent publisher/category render as nothing, not a placeholder.
    let publisher = game.publisher_name.as_deref().unwrap_or("");
    let category = game.category_name.as_deref().unwrap_or("");
    let rating = match game.star_rating {
        Some(stars) => format!("{:.1}★", stars),
        None => String::new(),
    };

    let title_budget = (width as usize * 45 / 100).saturating_sub(2);
    Row::new(vec![
        Cell::from(truncate(&game.title, title_budget)).style(base),
        Cell::from(publisher.to_string()).style(tint),
        Cell::from(category.to_string()).style(tint),
        Cell::from(rating).style(rating_tint),
    ])
}

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + 1 >= max_width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Azul", 20), "Azul");
    }

    #[test]
    fn test_truncate_long_text_gets_ellipsis() {
        let out = truncate("Twilight Imperium: Fourth Edition", 12);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 12);
    }
}
