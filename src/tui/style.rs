//! Color constants and auto-scaling helpers for the TUI.

use ratatui::style::Color;

use crate::model::{NodeStatus, Severity};

/// Active connection line color.
pub const FLOW_COLOR: Color = Color::Cyan;
/// Inactive connection line color.
pub const FLOW_INACTIVE: Color = Color::DarkGray;
/// Animated flow dot color.
pub const FLOW_DOT: Color = Color::Yellow;
/// Generation series color.
pub const GENERATION_COLOR: Color = Color::Green;
/// Consumption series color.
pub const CONSUMPTION_COLOR: Color = Color::Magenta;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Selected tab / selected weather highlight.
pub const SELECTED: Color = Color::Cyan;

/// Returns a color for the grid load gauge based on the load percentage.
pub fn load_color(load_pct: f32) -> Color {
    if load_pct < 50.0 {
        Color::Green
    } else if load_pct < 80.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Returns the badge color for an alert severity.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Blue,
        Severity::Success => Color::Green,
        Severity::Warning => Color::Red,
    }
}

/// Returns the glyph color for a node status.
pub fn node_color(status: NodeStatus) -> Color {
    match status {
        NodeStatus::Online => Color::Green,
        NodeStatus::Trading => Color::Cyan,
        NodeStatus::Offline => Color::Red,
    }
}

/// Computes Y-axis bounds from chart data points with 10% padding.
pub fn auto_bounds_y(a: &[(f64, f64)], b: &[(f64, f64)]) -> [f64; 2] {
    let all = a.iter().chain(b.iter()).map(|&(_, y)| y);
    let min = all.clone().fold(f64::INFINITY, f64::min);
    let max = all.fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [-1.0, 1.0];
    }
    let range = (max - min).max(0.1);
    let pad = range * 0.1;
    [min - pad, max + pad]
}
