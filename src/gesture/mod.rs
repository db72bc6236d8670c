//! Drag-to-adjust gesture core.
//!
//! A press with the primary button acquires pointer capture and starts a
//! drag; every movement sample while dragging becomes one signed delta;
//! release (or the host revoking capture) ends it. Deltas are never
//! accumulated here. The caller integrates them into whatever value it
//! owns.
//!
//! - [`axis`] - horizontal/vertical selection
//! - [`delta`] - pure movement-to-delta mapping
//! - [`controller`] - the `Idle`/`Dragging` state machine
//! - [`control`] - config + change handler wrapped around the controller

pub mod axis;
pub mod control;
pub mod controller;
pub mod delta;
pub mod event;

pub use axis::Axis;
pub use control::{DragControl, DragControlConfig, DragDelta};
pub use controller::{GestureController, GestureState};
pub use delta::{compute_delta, delta_or_zero, MovementSample};
pub use event::{PointerButton, PointerInput};
