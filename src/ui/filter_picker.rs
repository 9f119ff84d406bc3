//! Filter picker overlay
//!
//! A centered popup listing "All" plus the reference-data options for one
//! filter dimension. An empty option list (reference fetch failed or still
//! in flight) renders as just "All" with a hint line.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::CatalogOption;
use crate::ui::centered_rect;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED};

/// Render the active picker overlay, if any.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (title, options) = match app.focus {
        Focus::PublisherPicker => (" Publisher ", &app.publishers),
        Focus::CategoryPicker => (" Category ", &app.categories),
        Focus::List => return,
    };

    // One line per option plus the "All" entry, capped to the screen.
    let content_height = (options.len() as u16 + 1).min(area.height.saturating_sub(6)).max(1);
    let popup = centered_rect(area, 40, content_height + 2);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(title, Style::default().fg(COLOR_HEADER)));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = option_lines(options, app.picker_index, inner.height as usize);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn option_lines(
    options: &[CatalogOption],
    selected: usize,
    height: usize,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(entry_line("All", selected == 0));
    for (index, option) in options.iter().enumerate() {
        lines.push(entry_line(&option.name, selected == index + 1));
    }
    if options.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (no options loaded)",
            Style::default().fg(COLOR_DIM),
        )));
    }

    // Keep the selected line visible when the list overflows the popup.
    if lines.len() > height && selected >= height {
        let skip = selected + 1 - height;
        lines.drain(..skip);
    }
    lines
}

fn entry_line(name: &str, selected: bool) -> Line<'static> {
    let (marker, style) = if selected {
        (
            "▸ ",
            Style::default()
                .fg(COLOR_SELECTED)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default())
    };
    Line::from(Span::styled(format!("{}{}", marker, name), style))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(names: &[&str]) -> Vec<CatalogOption> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| CatalogOption {
                id: i as i64 + 1,
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_all_entry_always_first() {
        let lines = option_lines(&options(&["Strategy"]), 0, 10);
        assert!(lines[0].to_string().contains("All"));
        assert!(lines[0].to_string().contains('▸'));
    }

    #[test]
    fn test_empty_options_show_hint() {
        let lines = option_lines(&[], 0, 10);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].to_string().contains("no options loaded"));
    }

    #[test]
    fn test_overflow_keeps_selection_visible() {
        let many = options(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let lines = option_lines(&many, 8, 4);
        let joined: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(joined.iter().any(|l| l.contains("▸ h")));
    }
}
