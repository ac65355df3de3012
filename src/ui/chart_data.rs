//! Chart inputs derived from an [`InventorySummary`].
//!
//! Both charts share one shape: ordered labels plus one series whose
//! values and colors line up with the labels.

use ratatui::style::Color;

use super::theme::{palette_color, COLOR_IN_STOCK, COLOR_OUT_OF_STOCK};
use crate::catalog::InventorySummary;
use crate::models::availability_label;

/// Title of the genre chart series.
pub const GENRE_CHART_LABEL: &str = "Books by Genre";

/// Title of the availability chart series.
pub const AVAILABILITY_CHART_LABEL: &str = "Inventory Status";

/// One series of values with a color per value.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub data: Vec<u64>,
    pub background_color: Vec<Color>,
}

/// Labels plus the series plotted against them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Series>,
}

impl ChartData {
    /// Iterate `(label, value, color)` for the first series.
    pub fn points(&self) -> impl Iterator<Item = (&str, u64, Color)> + '_ {
        let series = self.datasets.first();
        self.labels.iter().enumerate().filter_map(move |(i, label)| {
            let series = series?;
            let value = *series.data.get(i)?;
            let color = series.background_color.get(i).copied().unwrap_or(Color::Reset);
            Some((label.as_str(), value, color))
        })
    }

    /// Sum of the first series.
    pub fn total(&self) -> u64 {
        self.datasets
            .first()
            .map(|series| series.data.iter().sum())
            .unwrap_or(0)
    }
}

/// Bar chart input: one bar per genre in first-seen order.
pub fn genre_chart_data(summary: &InventorySummary) -> ChartData {
    let labels = summary.by_genre.iter().map(|g| g.genre.clone()).collect();
    let data = summary.by_genre.iter().map(|g| g.count as u64).collect();
    let background_color = (0..summary.by_genre.len()).map(palette_color).collect();

    ChartData {
        labels,
        datasets: vec![Series {
            label: GENRE_CHART_LABEL.to_string(),
            data,
            background_color,
        }],
    }
}

/// Availability split: always both labels, in stock first.
pub fn availability_chart_data(summary: &InventorySummary) -> ChartData {
    ChartData {
        labels: vec![
            availability_label(true).to_string(),
            availability_label(false).to_string(),
        ],
        datasets: vec![Series {
            label: AVAILABILITY_CHART_LABEL.to_string(),
            data: vec![summary.in_stock() as u64, summary.out_of_stock() as u64],
            background_color: vec![COLOR_IN_STOCK, COLOR_OUT_OF_STOCK],
        }],
    }
}
