//! Chart panels: genre bar chart and availability split.
//!
//! The availability split is drawn as one proportional bar of block
//! characters with a count list under it.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use super::chart_data::{availability_chart_data, genre_chart_data, ChartData};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::catalog::InventorySummary;
use crate::models::availability_label;

/// Filled block for a slice with books
const BLOCK_FILLED: char = '\u{2588}';

/// Light shade for an empty bar
const BLOCK_LIGHT: char = '\u{2591}';

const MIN_BAR_WIDTH: u16 = 3;
const MAX_BAR_WIDTH: u16 = 12;

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
}

// ============================================================================
// Genre Chart
// ============================================================================

/// Render the genre bar chart.
pub fn render_genre_chart(frame: &mut Frame, area: Rect, summary: &InventorySummary) {
    let chart = genre_chart_data(summary);
    let title = chart
        .datasets
        .first()
        .map(|series| series.label.clone())
        .unwrap_or_default();
    let block = panel(&title);

    if chart.labels.is_empty() {
        let empty = Paragraph::new(Line::styled("No data", Style::default().fg(COLOR_DIM)))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = chart
        .points()
        .map(|(label, value, color)| {
            Bar::default()
                .value(value)
                .label(Line::from(label.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let barchart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width_for(inner_width, bars.len()))
        .bar_gap(1);

    frame.render_widget(barchart, area);
}

/// Widest bar that still fits `count` bars (with a one-cell gap) in `width`.
pub fn bar_width_for(width: u16, count: usize) -> u16 {
    if count == 0 {
        return MAX_BAR_WIDTH;
    }
    let count = count.min(u16::MAX as usize) as u16;
    let per_bar = width.saturating_sub(count.saturating_sub(1)) / count;
    per_bar.clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}

// ============================================================================
// Availability Split
// ============================================================================

/// Widths of the two slices of the availability bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceWidths {
    pub in_stock: u16,
    pub out_of_stock: u16,
}

/// Split `total_width` proportionally between the two counts.
///
/// In stock is floored and out of stock takes the remainder, so the slices
/// always fill the bar exactly. With no books both slices are empty.
pub fn calculate_slice_widths(in_stock: u64, out_of_stock: u64, total_width: u16) -> SliceWidths {
    let total = in_stock + out_of_stock;
    if total == 0 {
        return SliceWidths {
            in_stock: 0,
            out_of_stock: 0,
        };
    }

    let in_width = ((in_stock as f64 / total as f64) * total_width as f64).floor() as u16;
    SliceWidths {
        in_stock: in_width,
        out_of_stock: total_width.saturating_sub(in_width),
    }
}

/// `In Stock: n` / `Out of Stock: n` for the availability values present.
pub fn count_list(summary: &InventorySummary) -> Vec<String> {
    summary
        .by_availability
        .iter()
        .rev()
        .map(|(available, count)| format!("{}: {}", availability_label(*available), count))
        .collect()
}

/// Render the availability split and the count list.
pub fn render_availability_chart(frame: &mut Frame, area: Rect, summary: &InventorySummary) {
    let chart = availability_chart_data(summary);
    let title = chart
        .datasets
        .first()
        .map(|series| series.label.clone())
        .unwrap_or_default();
    let block = panel(&title);
    let inner_width = area.width.saturating_sub(2);

    let mut lines = vec![split_bar_line(&chart, inner_width), Line::default()];

    let colors: Vec<(String, Color)> = chart
        .points()
        .map(|(label, _, color)| (label.to_string(), color))
        .collect();
    for entry in count_list(summary) {
        let color = colors
            .iter()
            .find(|(label, _)| entry.starts_with(&format!("{}:", label)))
            .map(|(_, color)| *color)
            .unwrap_or(COLOR_DIM);
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", BLOCK_FILLED), Style::default().fg(color)),
            Span::raw(entry),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn split_bar_line(chart: &ChartData, width: u16) -> Line<'static> {
    let points: Vec<_> = chart.points().collect();
    let (in_stock, in_color) = points
        .first()
        .map(|(_, value, color)| (*value, *color))
        .unwrap_or((0, COLOR_DIM));
    let (out_of_stock, out_color) = points
        .get(1)
        .map(|(_, value, color)| (*value, *color))
        .unwrap_or((0, COLOR_DIM));

    let widths = calculate_slice_widths(in_stock, out_of_stock, width);
    if widths.in_stock == 0 && widths.out_of_stock == 0 {
        return Line::styled(
            BLOCK_LIGHT.to_string().repeat(width as usize),
            Style::default().fg(COLOR_DIM),
        );
    }

    Line::from(vec![
        Span::styled(
            BLOCK_FILLED.to_string().repeat(widths.in_stock as usize),
            Style::default().fg(in_color),
        ),
        Span::styled(
            BLOCK_FILLED.to_string().repeat(widths.out_of_stock as usize),
            Style::default().fg(out_color),
        ),
    ])
}
