//! Keyboard and mouse handling for [`App`].
//!
//! Any downward movement that ends within [`NEAR_BOTTOM_ROWS`] of the last
//! row counts as scrolling near the bottom and may start the next page.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use super::App;
use crate::catalog::AvailabilityFilter;

/// Rows from the end of the table that count as "near the bottom".
pub const NEAR_BOTTOM_ROWS: usize = 2;

/// Rows moved by PgUp/PgDn before the first frame reports a viewport.
const DEFAULT_PAGE_ROWS: usize = 10;

/// Whether `selected` is close enough to the end of `len` rows to load more.
///
/// An empty table is always at the bottom, otherwise a filter that hides
/// every loaded row could never ask for the next page.
pub fn is_near_bottom(selected: Option<usize>, len: usize) -> bool {
    if len == 0 {
        return true;
    }
    match selected {
        Some(i) => i + NEAR_BOTTOM_ROWS + 1 >= len,
        None => false,
    }
}

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::PageDown => self.move_selection(self.page_rows() as isize),
            KeyCode::PageUp => self.move_selection(-(self.page_rows() as isize)),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Char('f') | KeyCode::Tab => self.set_filter(self.state.filter().next()),
            KeyCode::BackTab => self.set_filter(self.state.filter().prev()),
            KeyCode::Char('1') => self.set_filter(AvailabilityFilter::All),
            KeyCode::Char('2') => self.set_filter(AvailabilityFilter::InStock),
            KeyCode::Char('3') => self.set_filter(AvailabilityFilter::OutOfStock),
            KeyCode::Char('r') => self.retry(),
            _ => {}
        }
    }

    /// Handle a mouse event. Only the scroll wheel does anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.move_selection(1),
            MouseEventKind::ScrollUp => self.move_selection(-1),
            _ => {}
        }
    }

    /// Move the table selection by `delta` rows, clamped to the table.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.state.filtered().len();
        if len > 0 {
            let current = self.table.selected().unwrap_or(0) as isize;
            let next = (current + delta).clamp(0, len as isize - 1) as usize;
            self.table.select(Some(next));
            self.mark_dirty();
        }
        if delta > 0 {
            self.check_near_bottom();
        }
    }

    pub fn select_first(&mut self) {
        if !self.state.filtered().is_empty() {
            self.table.select(Some(0));
            self.mark_dirty();
        }
    }

    pub fn select_last(&mut self) {
        let len = self.state.filtered().len();
        if len > 0 {
            self.table.select(Some(len - 1));
            self.mark_dirty();
        }
        self.check_near_bottom();
    }

    fn check_near_bottom(&mut self) {
        if is_near_bottom(self.table.selected(), self.state.filtered().len()) {
            self.scroll_near_bottom();
        }
    }

    fn page_rows(&self) -> usize {
        if self.table_viewport_rows == 0 {
            DEFAULT_PAGE_ROWS
        } else {
            self.table_viewport_rows
        }
    }
}
