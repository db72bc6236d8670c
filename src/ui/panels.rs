//! Control list and action log panels.

use std::io::Write;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::traits::ControlId;
use crate::widgets::DragControlWidget;

use super::helpers::{format_delta, format_value, inner_rect};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DECREASE, COLOR_DIM, COLOR_HEADER, COLOR_INCREASE,
};

/// Width reserved for labels in the control list.
const LABEL_WIDTH: u16 = 14;

/// Gap between the drag widget and the value.
const VALUE_GAP: u16 = 2;

/// Render every control on its own row and register its hit area.
pub fn render_controls<W: Write>(
    frame: &mut Frame,
    area: Rect,
    app: &mut App<W>,
    hovered: Option<ControlId>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" controls ");
    frame.render_widget(block, area);

    let inner = inner_rect(area, 1);
    let bottom = inner.y + inner.height;
    let mut y = inner.y;
    let mut registered = Vec::with_capacity(app.controls().len());

    for (index, demo) in app.controls().iter().enumerate() {
        let control = demo.control();
        let (widget_width, widget_height) = DragControlWidget::preferred_size(control.axis());
        if y + widget_height > bottom {
            break;
        }

        let focused = index == app.focused();
        let (marker, label_style) = if focused {
            (
                "▸ ",
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(COLOR_DIM))
        };
        let label = Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
            Span::styled(demo.label(), label_style),
        ]);
        let label_area = Rect::new(inner.x, y, LABEL_WIDTH.min(inner.width), 1);
        frame.render_widget(Paragraph::new(label), label_area);

        let widget_x = inner.x + LABEL_WIDTH;
        if widget_x < inner.x + inner.width {
            let widget_area = Rect::new(
                widget_x,
                y,
                widget_width.min(inner.x + inner.width - widget_x),
                widget_height,
            );
            frame.render_widget(
                DragControlWidget::for_control(control).hovered(hovered == Some(control.id())),
                widget_area,
            );
            registered.push((widget_area, control.id()));

            let value_x = widget_x + widget_width + VALUE_GAP;
            if value_x < inner.x + inner.width {
                let value = Line::from(vec![
                    Span::styled(format_value(demo.value()), Style::default().fg(COLOR_ACCENT)),
                    Span::styled(
                        format!(" ({})", control.axis().short_name()),
                        Style::default().fg(COLOR_DIM),
                    ),
                ]);
                let value_area = Rect::new(value_x, y, inner.x + inner.width - value_x, 1);
                frame.render_widget(Paragraph::new(value), value_area);
            }
        }

        // One blank row between controls
        y += widget_height + 1;
    }

    for (rect, id) in registered {
        app.hit_areas.register(rect, id);
    }
}

/// Render the most recent deltas, newest at the bottom.
pub fn render_action_log<W: Write>(frame: &mut Frame, area: Rect, app: &App<W>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" onChange ");

    let visible = area.height.saturating_sub(2) as usize;
    let actions = app.actions();
    let skip = actions.len().saturating_sub(visible);

    let lines: Vec<Line> = actions
        .iter()
        .skip(skip)
        .map(|entry| {
            let color = if entry.delta < 0.0 {
                COLOR_DECREASE
            } else {
                COLOR_INCREASE
            };
            Line::from(vec![
                Span::styled(format!("{} ", entry.label), Style::default().fg(COLOR_DIM)),
                Span::styled(format_delta(entry.delta), Style::default().fg(color)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
