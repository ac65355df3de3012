//! UI rendering for the inventory dashboard.
//!
//! Layout, top to bottom:
//! - header with the app name and loaded/total counts
//! - chart row: genre bar chart (left) and availability split (right)
//! - filter selector
//! - book table (fills the remaining height)
//! - footer: fetch status and key hints
//!
//! On short terminals the chart row is dropped before the table shrinks
//! below a few rows.

pub mod chart_data;
pub mod charts;
mod footer;
mod table;
pub mod theme;

pub use chart_data::{availability_chart_data, genre_chart_data, ChartData, Series};
pub use footer::{key_hints, spinner_char, status_text};
pub use table::COLUMNS;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::App;
use theme::{COLOR_ACCENT, COLOR_DIM};

/// Height of the chart row.
const CHART_HEIGHT: u16 = 10;

/// Below this terminal height the charts are hidden.
const MIN_HEIGHT_FOR_CHARTS: u16 = 20;

/// Render the whole dashboard.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let chart_height = if area.height >= MIN_HEIGHT_FOR_CHARTS {
        CHART_HEIGHT
    } else {
        0
    };

    let [header, charts, filter, table_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(chart_height),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(area);

    render_header(frame, header, app);

    if charts.height > 0 {
        let [genre, availability] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(charts);
        charts::render_genre_chart(frame, genre, app.state.summary());
        charts::render_availability_chart(frame, availability, app.state.summary());
    }

    table::render_filter_selector(frame, filter, app.state.filter());
    table::render_table(frame, table_area, app);
    footer::render_footer(frame, footer_area, &app.state, app.tick_count);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let loaded = app.state.catalog().len();
    let counts = match app.state.reported_total() {
        Some(total) => format!("  {} / {} books", loaded, total),
        None => format!("  {} books", loaded),
    };
    let line = Line::from(vec![
        Span::styled(
            "Book Inventory",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(counts, Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(line, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::app::AppMessage;
    use crate::catalog::{AvailabilityFilter, CatalogClient};
    use crate::models::{BookPage, BookRecord};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn create_test_app() -> App {
        let client = CatalogClient::with_http("http://api.test", Arc::new(MockHttpClient::new()));
        App::new(Arc::new(client))
    }

    fn load(app: &mut App, books: Vec<BookRecord>, total: u64) {
        app.mount();
        app.handle_message(AppMessage::PageLoaded {
            page: 1,
            result: Ok(BookPage {
                book: books,
                total_count: total,
            }),
        });
    }

    fn sample_books() -> Vec<BookRecord> {
        vec![
            BookRecord {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                genre: "Sci-Fi".to_string(),
                price: 9.99,
                availability: true,
            },
            BookRecord {
                title: "Emma".to_string(),
                author: "Jane Austen".to_string(),
                genre: "Fiction".to_string(),
                price: 7.5,
                availability: false,
            },
        ]
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_empty_dashboard() {
        let mut app = create_test_app();
        let text = draw(&mut app, 100, 30);
        assert!(text.contains("Book Inventory"));
        assert!(text.contains("Books by Genre"));
        assert!(text.contains("Inventory Status"));
        assert!(text.contains("Title"));
        assert!(text.contains("Availability"));
    }

    #[tokio::test]
    async fn test_render_loaded_rows() {
        let mut app = create_test_app();
        load(&mut app, sample_books(), 2);
        let text = draw(&mut app, 100, 30);

        assert!(text.contains("Dune"));
        assert!(text.contains("Frank Herbert"));
        assert!(text.contains("9.99"));
        assert!(text.contains("7.50"));
        assert!(text.contains("Out of Stock"));
        assert!(text.contains("In Stock: 1"));
        assert!(text.contains("Out of Stock: 1"));
        assert!(text.contains("All 2 books loaded"));
    }

    #[tokio::test]
    async fn test_render_filtered_rows() {
        let mut app = create_test_app();
        load(&mut app, sample_books(), 2);
        app.set_filter(AvailabilityFilter::OutOfStock);
        let text = draw(&mut app, 100, 30);

        assert!(text.contains("Emma"));
        assert!(!text.contains("Dune"));
        assert!(text.contains("Books (1 of 2)"));
    }

    #[tokio::test]
    async fn test_render_shows_loading_indicator() {
        let mut app = create_test_app();
        app.mount();
        let text = draw(&mut app, 100, 30);
        assert!(text.contains("Loading... page 1"));
    }

    #[tokio::test]
    async fn test_render_records_viewport_rows() {
        let mut app = create_test_app();
        load(&mut app, sample_books(), 2);
        draw(&mut app, 100, 30);
        // 30 rows - header - charts - filter - footer, minus table chrome
        assert_eq!(app.table_viewport_rows, 30 - 1 - 10 - 1 - 2 - 3);
    }

    #[test]
    fn test_render_small_terminal_hides_charts() {
        let mut app = create_test_app();
        let text = draw(&mut app, 60, 12);
        assert!(!text.contains("Books by Genre"));
        assert!(text.contains("Title"));
    }
}
