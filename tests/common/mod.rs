//! Common test utilities for integration tests.
//!
//! Fixtures for driving drag controls through the mock capture host and
//! for building terminal mouse events.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub use dragnum::adapters::mock::MockPointerCapture;
pub use dragnum::gesture::{
    Axis, DragControl, DragControlConfig, DragDelta, GestureState, MovementSample,
    PointerButton, PointerInput,
};
pub use dragnum::traits::{ControlId, PointerCapture};

/// Deltas received by a control's change handler, in order.
pub type Emitted = Rc<RefCell<Vec<f64>>>;

/// Host event type used by the gesture tests.
pub type TestEvent = u32;

/// Creates a control on `axis` that records every emitted delta.
pub fn recording_control(id: u32, axis: Axis) -> (DragControl<TestEvent>, Emitted) {
    let emitted: Emitted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&emitted);
    let control = DragControl::new(
        ControlId::new(id),
        DragControlConfig::with_axis(axis),
        move |delta: DragDelta<'_, TestEvent>| sink.borrow_mut().push(delta.value),
    );
    (control, emitted)
}

/// Primary-button press.
pub fn press() -> PointerInput {
    PointerInput::Press(PointerButton::Primary)
}

/// Movement notification with a well-formed sample.
pub fn moved(dx: f64, dy: f64) -> PointerInput {
    PointerInput::Move(Some(MovementSample::new(dx, dy)))
}

/// Feeds a sequence of inputs, numbering host events from zero.
pub fn feed<H: PointerCapture>(
    control: &mut DragControl<TestEvent>,
    host: &mut H,
    inputs: &[PointerInput],
) {
    for (index, input) in inputs.iter().enumerate() {
        control.handle(host, *input, &(index as TestEvent));
    }
}

/// Builds a crossterm mouse event.
pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn left_down(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn left_drag(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

pub fn left_up(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}
