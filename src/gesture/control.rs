//! Caller-facing drag control.
//!
//! Wraps a [`GestureController`] with the per-instance configuration and the
//! caller's change handler. The handler gets one [`DragDelta`] per movement
//! notification while dragging; what the number means is up to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::axis::Axis;
use super::controller::{GestureController, GestureState};
use super::event::PointerInput;
use crate::traits::{ControlId, PointerCapture};

/// Per-instance configuration, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragControlConfig {
    #[serde(default)]
    pub axis: Axis,
}

impl DragControlConfig {
    pub fn with_axis(axis: Axis) -> Self {
        Self { axis }
    }
}

/// One emitted delta together with the host event it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDelta<'a, E> {
    pub value: f64,
    pub event: &'a E,
}

type ChangeHandler<E> = Box<dyn FnMut(DragDelta<'_, E>)>;

/// Drag-to-adjust control.
///
/// `E` is the host's event type; it is passed through untouched to the
/// change handler.
pub struct DragControl<E> {
    controller: GestureController,
    on_change: ChangeHandler<E>,
}

impl<E> DragControl<E> {
    pub fn new<F>(id: ControlId, config: DragControlConfig, on_change: F) -> Self
    where
        F: FnMut(DragDelta<'_, E>) + 'static,
    {
        Self {
            controller: GestureController::new(id, config.axis),
            on_change: Box::new(on_change),
        }
    }

    pub fn id(&self) -> ControlId {
        self.controller.id()
    }

    pub fn axis(&self) -> Axis {
        self.controller.axis()
    }

    pub fn state(&self) -> GestureState {
        self.controller.state()
    }

    /// Whether the control should render as active.
    pub fn is_active(&self) -> bool {
        self.controller.is_dragging()
    }

    /// End any drag in progress and give capture back to the host.
    ///
    /// Used before a control is dropped so the host is not left owned by a
    /// control that no longer exists.
    pub fn release<H>(&mut self, host: &mut H) -> bool
    where
        H: PointerCapture + ?Sized,
    {
        self.controller.release(host)
    }

    /// Feed one host notification through the control.
    ///
    /// Returns the delta handed to the change handler, if one was emitted.
    pub fn handle<H>(&mut self, host: &mut H, input: PointerInput, event: &E) -> Option<f64>
    where
        H: PointerCapture + ?Sized,
    {
        trace!(control = %self.id(), input = input.kind(), state = ?self.state(), "pointer input");

        match input {
            PointerInput::Press(button) => {
                self.controller.press(host, button);
                None
            }
            PointerInput::Move(sample) => {
                let value = self.controller.movement(host, sample)?;
                (self.on_change)(DragDelta { value, event });
                Some(value)
            }
            PointerInput::Release => {
                self.controller.release(host);
                None
            }
            PointerInput::CaptureRevoked => {
                self.controller.capture_lost();
                None
            }
        }
    }
}

impl<E> fmt::Debug for DragControl<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragControl")
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::adapters::mock::MockPointerCapture;
    use crate::gesture::{MovementSample, PointerButton};

    type Log = Rc<RefCell<Vec<(f64, &'static str)>>>;

    fn recording_control(axis: Axis) -> (DragControl<&'static str>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let control = DragControl::new(
            ControlId::new(9),
            DragControlConfig::with_axis(axis),
            move |delta: DragDelta<'_, &'static str>| {
                sink.borrow_mut().push((delta.value, *delta.event));
            },
        );
        (control, log)
    }

    #[test]
    fn test_config_default_axis() {
        assert_eq!(DragControlConfig::default().axis, Axis::Horizontal);

        let config: DragControlConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.axis, Axis::Horizontal);

        let config: DragControlConfig = serde_json::from_str(r#"{"axis":"y"}"#).unwrap();
        assert_eq!(config.axis, Axis::Vertical);
    }

    #[test]
    fn test_handler_receives_delta_and_event() {
        let mut host = MockPointerCapture::new();
        let (mut control, log) = recording_control(Axis::Horizontal);

        control.handle(&mut host, PointerInput::Press(PointerButton::Primary), &"down");
        let emitted = control.handle(
            &mut host,
            PointerInput::Move(Some(MovementSample::new(5.0, -3.0))),
            &"move-1",
        );
        control.handle(&mut host, PointerInput::Release, &"up");

        assert_eq!(emitted, Some(5.0));
        assert_eq!(*log.borrow(), vec![(5.0, "move-1")]);
        assert!(!control.is_active());
    }

    #[test]
    fn test_press_and_release_do_not_emit() {
        let mut host = MockPointerCapture::new();
        let (mut control, log) = recording_control(Axis::Vertical);

        assert_eq!(
            control.handle(&mut host, PointerInput::Press(PointerButton::Primary), &"down"),
            None
        );
        assert!(control.is_active());
        assert_eq!(control.handle(&mut host, PointerInput::Release, &"up"), None);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_revocation_stops_emission() {
        let mut host = MockPointerCapture::new();
        let (mut control, log) = recording_control(Axis::Horizontal);

        control.handle(&mut host, PointerInput::Press(PointerButton::Primary), &"down");
        host.revoke();
        control.handle(&mut host, PointerInput::CaptureRevoked, &"focus-lost");
        control.handle(
            &mut host,
            PointerInput::Move(Some(MovementSample::new(2.0, 0.0))),
            &"late",
        );

        assert_eq!(control.state(), GestureState::Idle);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_debug_omits_handler() {
        let (control, _) = recording_control(Axis::Horizontal);
        let rendered = format!("{:?}", control);
        assert!(rendered.starts_with("DragControl"));
        assert!(rendered.contains("Horizontal"));
    }
}
