//! UI rendering for the drag control demo.
//!
//! The screen is a title bar with key hints, the list of controls on the
//! left and the action log on the right. Hit areas are rebuilt on every
//! frame so the pointer router always sees the current layout.

mod helpers;
pub mod interaction;
mod panels;
mod theme;

pub use helpers::{format_delta, format_value};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DECREASE, COLOR_DIM, COLOR_HEADER, COLOR_INCREASE,
};

use std::io::Write;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use panels::{render_action_log, render_controls};

/// Key hints shown in the title bar.
const KEY_HINTS: &[(&str, &str)] = &[
    ("drag", "adjust"),
    ("tab", "focus"),
    ("x/y", "axis"),
    ("r", "reset"),
    ("s", "save"),
    ("q", "quit"),
];

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the demo
pub fn render<W: Write>(frame: &mut Frame, app: &mut App<W>) {
    // Hover is keyed by control, so it survives the registry reset
    let hovered = app.hit_areas.hovered();
    app.hit_areas.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title and key hints
            Constraint::Min(3),    // Panels
        ])
        .split(frame.area());

    render_title(frame, chunks[0], app.status());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_controls(frame, panels[0], app, hovered);
    render_action_log(frame, panels[1], app);
}

fn render_title(frame: &mut Frame, area: Rect, status: Option<&str>) {
    let mut spans = vec![Span::styled(
        " dragnum ",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    for (key, action) in KEY_HINTS {
        spans.push(Span::styled(format!(" {}", key), Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    if let Some(status) = status {
        spans.push(Span::styled(format!("  {}", status), Style::default().fg(COLOR_ACCENT)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
