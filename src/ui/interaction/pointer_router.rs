//! Terminal event routing for drag controls.
//!
//! Terminals report absolute cell positions. The router turns them into the
//! relative displacement the gesture core expects and decides which control
//! each notification belongs to: presses go to the control under the
//! pointer, everything else goes to the control holding capture. A primary
//! press arriving while capture is still held first ends that gesture, since
//! the terminal dropped its release.

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use super::hit_area::HitAreaRegistry;
use crate::gesture::{MovementSample, PointerButton, PointerInput};
use crate::traits::ControlId;

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
        }
    }
}

/// A notification addressed to one control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub target: ControlId,
    pub input: PointerInput,
}

/// Translates crossterm events into per-control pointer input.
#[derive(Debug, Default)]
pub struct PointerRouter {
    /// Last reported pointer cell while a drag may be in progress
    last_position: Option<(u16, u16)>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one terminal event.
    ///
    /// `capture_owner` is the control currently holding pointer capture,
    /// as reported by the host. Routes are returned in delivery order; most
    /// events produce at most one, and events no control cares about
    /// produce none.
    pub fn route(
        &mut self,
        event: &Event,
        hit_areas: &HitAreaRegistry,
        capture_owner: Option<ControlId>,
    ) -> Vec<Route> {
        match event {
            Event::Mouse(mouse) => self.route_mouse(mouse, hit_areas, capture_owner),
            Event::FocusLost => {
                self.last_position = None;
                capture_owner
                    .map(|target| Route {
                        target,
                        input: PointerInput::CaptureRevoked,
                    })
                    .into_iter()
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    fn route_mouse(
        &mut self,
        mouse: &MouseEvent,
        hit_areas: &HitAreaRegistry,
        capture_owner: Option<ControlId>,
    ) -> Vec<Route> {
        let position = (mouse.column, mouse.row);
        let mut routes = Vec::new();

        match mouse.kind {
            MouseEventKind::Down(button) => {
                if button == MouseButton::Left {
                    // A primary press while a control still holds capture means
                    // the terminal lost the matching release
                    if let Some(stale) = capture_owner {
                        debug!(control = %stale, "primary press during drag, ending stale gesture");
                        routes.push(Route {
                            target: stale,
                            input: PointerInput::Release,
                        });
                    }
                    self.last_position = Some(position);
                }

                if let Some(target) = hit_areas.hit_test(mouse.column, mouse.row) {
                    routes.push(Route {
                        target,
                        input: PointerInput::Press(button.into()),
                    });
                }
            }
            MouseEventKind::Drag(_) => {
                let Some(target) = capture_owner else {
                    self.last_position = None;
                    return routes;
                };
                let sample = self.last_position.map(|from| {
                    MovementSample::between(
                        (f64::from(from.0), f64::from(from.1)),
                        (f64::from(position.0), f64::from(position.1)),
                    )
                });
                self.last_position = Some(position);
                routes.push(Route {
                    target,
                    input: PointerInput::Move(sample),
                });
            }
            MouseEventKind::Up(_) => {
                self.last_position = None;
                if let Some(target) = capture_owner {
                    routes.push(Route {
                        target,
                        input: PointerInput::Release,
                    });
                }
            }
            _ => {}
        }

        routes
    }
}
