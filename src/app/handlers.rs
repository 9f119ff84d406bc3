//! Keyboard handling: key events become state transitions.
//!
//! Dispatch depends on what has focus: the detail popup swallows
//! everything until closed, a picker owns navigation keys while open, and
//! the list gets the browse keys otherwise.

use crossterm::event::{KeyCode, KeyEvent};

use super::{App, Focus};
use crate::models::CatalogOption;

impl App {
    /// Handle a key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.detail.visible {
            self.handle_detail_key(key);
            return;
        }
        match self.focus {
            Focus::List => self.handle_list_key(key),
            Focus::PublisherPicker | Focus::CategoryPicker => self.handle_picker_key(key),
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.detail.close(),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_row + 1 < self.games.len() {
                    self.selected_row += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.previous_page(),
            KeyCode::Right | KeyCode::Char('l') => self.next_page(),
            KeyCode::Home | KeyCode::Char('g') => self.first_page(),
            KeyCode::End | KeyCode::Char('G') => self.last_page(),
            KeyCode::Char('z') => self.cycle_page_size(),
            KeyCode::Char('s') => self.cycle_sort_field(),
            KeyCode::Char('o') => self.toggle_sort_order(),
            KeyCode::Char('p') => self.open_picker(Focus::PublisherPicker),
            KeyCode::Char('c') => self.open_picker(Focus::CategoryPicker),
            KeyCode::Char('x') => self.clear_filters(),
            KeyCode::Enter => self.open_detail(),
            _ => {}
        }
    }

    fn open_picker(&mut self, picker: Focus) {
        self.focus = picker;
        // Preselect the active filter so Enter without movement is a no-op
        // change; index 0 is "All".
        let (options, active) = match picker {
            Focus::PublisherPicker => (&self.publishers, self.filters.publisher_id),
            Focus::CategoryPicker => (&self.categories, self.filters.category_id),
            Focus::List => return,
        };
        self.picker_index = active
            .and_then(|id| options.iter().position(|o| o.id == id).map(|i| i + 1))
            .unwrap_or(0);
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let options_len = match self.focus {
            Focus::PublisherPicker => self.publishers.len(),
            Focus::CategoryPicker => self.categories.len(),
            Focus::List => 0,
        };
        match key.code {
            KeyCode::Esc => self.focus = Focus::List,
            KeyCode::Up | KeyCode::Char('k') => {
                self.picker_index = self.picker_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                // One extra slot for the leading "All" entry
                if self.picker_index < options_len {
                    self.picker_index += 1;
                }
            }
            KeyCode::Enter => self.apply_picker_selection(),
            _ => {}
        }
    }

    fn apply_picker_selection(&mut self) {
        let picker = self.focus;
        self.focus = Focus::List;

        let selected: Option<i64> = if self.picker_index == 0 {
            None
        } else {
            let options = match picker {
                Focus::PublisherPicker => &self.publishers,
                Focus::CategoryPicker => &self.categories,
                Focus::List => return,
            };
            match options.get(self.picker_index - 1) {
                Some(CatalogOption { id, .. }) => Some(*id),
                None => return,
            }
        };

        match picker {
            Focus::PublisherPicker => self.set_publisher(selected),
            Focus::CategoryPicker => self.set_category(selected),
            Focus::List => {}
        }
    }
}
