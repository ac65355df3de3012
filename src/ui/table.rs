//! Book table and filter selector.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, Tabs},
    Frame,
};

use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_IN_STOCK, COLOR_OUT_OF_STOCK, COLOR_SELECTION_BG,
};
use crate::app::App;
use crate::catalog::AvailabilityFilter;
use crate::models::BookRecord;

/// Column headers, in display order.
pub const COLUMNS: [&str; 5] = ["Title", "Author", "Genre", "Price", "Availability"];

/// Header row, borders and the highlight symbol take this many rows/cols.
const TABLE_CHROME_ROWS: u16 = 3;

fn book_row(book: &BookRecord) -> Row<'_> {
    let availability_color = if book.availability {
        COLOR_IN_STOCK
    } else {
        COLOR_OUT_OF_STOCK
    };
    Row::new(vec![
        Cell::from(book.title.as_str()),
        Cell::from(book.author.as_str()),
        Cell::from(book.genre.as_str()),
        Cell::from(Line::from(book.price_label()).right_aligned()),
        Cell::from(Span::styled(
            book.availability_label(),
            Style::default().fg(availability_color),
        )),
    ])
}

/// Render the filtered books. Records the visible row count on the app so
/// PgUp/PgDn move by a screenful.
pub fn render_table(frame: &mut Frame, area: Rect, app: &mut App) {
    app.table_viewport_rows = area.height.saturating_sub(TABLE_CHROME_ROWS) as usize;

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
        .style(Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD));

    let title = format!(
        " Books ({} of {}) ",
        app.state.filtered().len(),
        app.state.catalog().len()
    );

    let rows: Vec<Row> = app.state.filtered().iter().map(book_row).collect();
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(32),
            Constraint::Percentage(22),
            Constraint::Percentage(18),
            Constraint::Length(9),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(Span::styled(title, Style::default().fg(COLOR_ACCENT))),
    )
    .row_highlight_style(Style::default().bg(COLOR_SELECTION_BG))
    .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut app.table);
}

/// Render the three filter options with the current one highlighted.
pub fn render_filter_selector(frame: &mut Frame, area: Rect, current: AvailabilityFilter) {
    let titles: Vec<Line> = AvailabilityFilter::ALL
        .iter()
        .enumerate()
        .map(|(i, filter)| Line::from(format!("{} {}", i + 1, filter.display_name())))
        .collect();
    let selected = AvailabilityFilter::ALL
        .iter()
        .position(|f| *f == current)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(COLOR_DIM))
        .highlight_style(
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|");

    let line = Line::from(Span::styled("Filter: ", Style::default().fg(COLOR_DIM)));
    let label_width = line.width() as u16;
    frame.render_widget(line, Rect { width: label_width.min(area.width), ..area });
    frame.render_widget(
        tabs,
        Rect {
            x: area.x + label_width.min(area.width),
            width: area.width.saturating_sub(label_width),
            ..area
        },
    );
}
