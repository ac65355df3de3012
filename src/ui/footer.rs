//! Footer: fetch status line and key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};

use super::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR};
use crate::catalog::InventoryState;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner frame for a tick count.
pub fn spinner_char(tick: u64) -> char {
    SPINNER_CHARS[(tick % SPINNER_CHARS.len() as u64) as usize]
}

/// What the status line says, in priority order: loading, failed, all
/// loaded, more available.
pub fn status_text(state: &InventoryState) -> String {
    let loaded = state.catalog().len();
    let total = state
        .reported_total()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "?".to_string());

    if let Some(page) = state.phase().in_flight() {
        return format!("Loading... page {} ({} of {} loaded)", page, loaded, total);
    }
    if let Some(err) = state.last_error() {
        return format!(
            "Failed: {} | {}",
            err.user_message(),
            err.category().recovery_hint()
        );
    }
    if state.is_exhausted() {
        return format!("All {} books loaded", loaded);
    }
    if !state.is_mounted() {
        return "Starting...".to_string();
    }
    let pagination = state.pagination();
    format!(
        "{} of {} loaded | page {}/{} | scroll down for more",
        loaded, total, pagination.current_page, pagination.total_pages
    )
}

/// Key hints for the bottom row.
pub fn key_hints(state: &InventoryState) -> &'static str {
    if state.can_retry() {
        "j/k move  f filter  1-3 select  r retry  q quit"
    } else {
        "j/k move  f filter  1-3 select  q quit"
    }
}

/// Render the two footer rows.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &InventoryState, tick: u64) {
    if area.height == 0 {
        return;
    }

    let status = status_text(state);
    let status_line = if state.loading() {
        Line::from(vec![
            Span::styled(format!("{} ", spinner_char(tick)), Style::default().fg(COLOR_ACTIVE)),
            Span::styled(status, Style::default().fg(COLOR_ACTIVE)),
        ])
    } else if state.is_failed() {
        Line::styled(status, Style::default().fg(COLOR_ERROR))
    } else {
        Line::styled(status, Style::default().fg(COLOR_DIM))
    };
    frame.render_widget(status_line, Rect { height: 1, ..area });

    if area.height > 1 {
        let hints = Line::styled(key_hints(state), Style::default().fg(COLOR_DIM));
        frame.render_widget(
            hints,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}
