//! Color theme constants for the inventory dashboard.

use ratatui::style::Color;

// ============================================================================
// Chrome
// ============================================================================

/// Border color for panels
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Titles and the selected filter
pub const COLOR_ACCENT: Color = Color::White;

/// Secondary text (key hints, column headers)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Loading indicator
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Failed page message
pub const COLOR_ERROR: Color = Color::Red;

/// Background of the selected table row
pub const COLOR_SELECTION_BG: Color = Color::Rgb(30, 35, 55);

// ============================================================================
// Chart Palette
// ============================================================================

/// Genre bar colors, cycled when there are more genres than entries.
pub const CHART_PALETTE: [Color; 6] = [
    Color::Rgb(0xFF, 0x63, 0x84), // #FF6384
    Color::Rgb(0x36, 0xA2, 0xEB), // #36A2EB
    Color::Rgb(0xFF, 0xCE, 0x56), // #FFCE56
    Color::Rgb(0x4B, 0xC0, 0xC0), // #4BC0C0
    Color::Rgb(0x99, 0x66, 0xFF), // #9966FF
    Color::Rgb(0xFF, 0x9F, 0x40), // #FF9F40
];

/// In-stock slice of the availability chart
pub const COLOR_IN_STOCK: Color = Color::Rgb(0x36, 0xA2, 0xEB); // #36A2EB

/// Out-of-stock slice of the availability chart
pub const COLOR_OUT_OF_STOCK: Color = Color::Rgb(0xFF, 0x63, 0x84); // #FF6384

/// Palette color for the bar at `index`.
pub fn palette_color(index: usize) -> Color {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}
