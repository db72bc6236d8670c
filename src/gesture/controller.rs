//! Press/drag/release state machine.
//!
//! ```text
//!            press(primary) + capture granted
//!   Idle ─────────────────────────────────────▶ Dragging ──┐ movement
//!    ▲                                            │   ▲    │ (emit delta)
//!    │          release / capture lost            │   └────┘
//!    └────────────────────────────────────────────┘
//! ```
//!
//! The controller holds the host's [`CaptureGrant`] for exactly as long as
//! it is `Dragging`. Every path out of `Dragging` gets rid of the grant:
//! release hands it back to the host, revocation just drops it.

use tracing::{debug, trace, warn};

use super::axis::Axis;
use super::delta::{delta_or_zero, MovementSample};
use super::event::PointerButton;
use crate::traits::{CaptureGrant, CaptureRequest, ControlId, PointerCapture};

/// Observable interaction state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug)]
enum Phase {
    Idle,
    Dragging(CaptureGrant),
}

/// Gesture state machine for a single control.
#[derive(Debug)]
pub struct GestureController {
    id: ControlId,
    axis: Axis,
    phase: Phase,
}

impl GestureController {
    pub fn new(id: ControlId, axis: Axis) -> Self {
        Self {
            id,
            axis,
            phase: Phase::Idle,
        }
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn state(&self) -> GestureState {
        match self.phase {
            Phase::Idle => GestureState::Idle,
            Phase::Dragging(_) => GestureState::Dragging,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Handle a press. Returns true if a drag started.
    ///
    /// Non-primary buttons are ignored and never touch the host. A press
    /// while already dragging is ignored too. If the host refuses capture
    /// the controller stays idle and the request is not retried.
    pub fn press<H>(&mut self, host: &mut H, button: PointerButton) -> bool
    where
        H: PointerCapture + ?Sized,
    {
        if !button.is_primary() {
            trace!(control = %self.id, ?button, "ignoring non-primary press");
            return false;
        }

        if self.is_dragging() {
            trace!(control = %self.id, "press while dragging ignored");
            return false;
        }

        let request = CaptureRequest {
            owner: self.id,
            axis: self.axis,
        };

        match host.request_capture(request) {
            Ok(grant) => {
                debug!(
                    control = %self.id,
                    axis = %self.axis,
                    generation = grant.generation(),
                    "drag started"
                );
                self.phase = Phase::Dragging(grant);
                true
            }
            Err(err) => {
                warn!(control = %self.id, error = %err, "pointer capture refused, drag not started");
                false
            }
        }
    }

    /// Handle a movement sample. Returns the delta to emit, if any.
    ///
    /// Yields nothing while idle. If the host no longer lists this control
    /// as the capture owner the revocation is applied here, before any delta
    /// is produced.
    pub fn movement<H>(&mut self, host: &H, sample: Option<MovementSample>) -> Option<f64>
    where
        H: PointerCapture + ?Sized,
    {
        if !self.is_dragging() {
            trace!(control = %self.id, "movement while idle dropped");
            return None;
        }

        if host.owner() != Some(self.id) {
            debug!(control = %self.id, "capture no longer held, settling idle");
            self.capture_lost();
            return None;
        }

        match sample {
            Some(s) if s.is_well_formed() => {}
            _ => trace!(control = %self.id, ?sample, "malformed movement treated as zero"),
        }

        Some(delta_or_zero(sample, self.axis))
    }

    /// Handle a release. Returns true if a drag ended.
    ///
    /// Releasing while idle is a no-op.
    pub fn release<H>(&mut self, host: &mut H) -> bool
    where
        H: PointerCapture + ?Sized,
    {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging(grant) => {
                host.release_capture(grant);
                debug!(control = %self.id, "drag ended");
                true
            }
            Phase::Idle => false,
        }
    }

    /// Handle host revocation of capture. Returns true if a drag was cut short.
    pub fn capture_lost(&mut self) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging(grant) => {
                debug!(
                    control = %self.id,
                    generation = grant.generation(),
                    "capture revoked, drag cancelled"
                );
                true
            }
            Phase::Idle => false,
        }
    }
}
