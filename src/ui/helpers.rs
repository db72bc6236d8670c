//! Formatting helpers for UI rendering.

use ratatui::layout::Rect;

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Format an accumulated value; whole numbers drop the fraction.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Format a delta with an explicit sign (e.g. 3 -> "+3").
pub fn format_delta(delta: f64) -> String {
    let body = format_value(delta.abs());
    if delta < 0.0 {
        format!("-{}", body)
    } else {
        format!("+{}", body)
    }
}
