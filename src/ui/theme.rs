//! Color theme constants for the demo.

use ratatui::style::Color;

/// Panel border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Title and focused label color
pub const COLOR_HEADER: Color = Color::White;

/// Accent for values and the focus marker
pub const COLOR_ACCENT: Color = Color::Cyan;

/// Dim text for hints and idle labels
pub const COLOR_DIM: Color = Color::DarkGray;

/// Positive deltas in the action log
pub const COLOR_INCREASE: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Negative deltas in the action log
pub const COLOR_DECREASE: Color = Color::Red;
