//! Drag control widget.
//!
//! Draws the two arrows of a drag control inside a one-cell padded box:
//! side by side for a horizontal control, stacked for a vertical one. The
//! box lights up while a drag is in progress.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::gesture::{Axis, DragControl, GestureState};

/// Horizontal padding on each side of the arrows.
const PADDING: u16 = 1;

/// Renderable view of a drag control's presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragControlWidget {
    axis: Axis,
    active: bool,
    hovered: bool,
}

impl DragControlWidget {
    pub fn new(axis: Axis, state: GestureState) -> Self {
        Self {
            axis,
            active: state == GestureState::Dragging,
            hovered: false,
        }
    }

    /// Build the widget straight from a control.
    pub fn for_control<E>(control: &DragControl<E>) -> Self {
        Self::new(control.axis(), control.state())
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// Width and height the widget needs for the given axis.
    pub fn preferred_size(axis: Axis) -> (u16, u16) {
        let (first, second) = axis.arrows();
        let w1 = first.width() as u16;
        let w2 = second.width() as u16;
        match axis {
            Axis::Horizontal => (w1 + 1 + w2 + PADDING * 2, 1),
            Axis::Vertical => (w1.max(w2) + PADDING * 2, 2),
        }
    }

    fn style(&self) -> Style {
        if self.active {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else if self.hovered {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl Widget for DragControlWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = Self::preferred_size(self.axis);
        let rect = Rect {
            x: area.x,
            y: area.y,
            width: width.min(area.width),
            height: height.min(area.height),
        };

        if rect.width == 0 || rect.height == 0 {
            return;
        }

        let style = self.style();
        buf.set_style(rect, style);

        let (first, second) = self.axis.arrows();
        let x = rect.x + PADDING.min(rect.width);
        let right = rect.x + rect.width;

        match self.axis {
            Axis::Horizontal => {
                let first_width = first.width() as u16;
                buf.set_stringn(x, rect.y, first, right.saturating_sub(x) as usize, style);
                let second_x = x + first_width + 1;
                if second_x < right {
                    buf.set_stringn(
                        second_x,
                        rect.y,
                        second,
                        (right - second_x) as usize,
                        style,
                    );
                }
            }
            Axis::Vertical => {
                let max = right.saturating_sub(x) as usize;
                buf.set_stringn(x, rect.y, first, max, style);
                if rect.height > 1 {
                    buf.set_stringn(x, rect.y + 1, second, max, style);
                }
            }
        }
    }
}
