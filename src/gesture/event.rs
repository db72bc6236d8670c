//! Host notifications consumed by a drag control.

use super::delta::MovementSample;

/// Which button (trigger) a press came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u8),
}

impl PointerButton {
    /// Only the primary trigger starts a gesture.
    pub fn is_primary(self) -> bool {
        matches!(self, PointerButton::Primary)
    }
}

/// One notification from the host interaction environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// A button went down over the control
    Press(PointerButton),
    /// Relative displacement since the previous notification.
    /// `None` when the host could not provide movement data.
    Move(Option<MovementSample>),
    /// The button was released; ends the gesture
    Release,
    /// The host took capture away outside the normal release path
    CaptureRevoked,
}

impl PointerInput {
    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            PointerInput::Press(_) => "press",
            PointerInput::Move(_) => "move",
            PointerInput::Release => "release",
            PointerInput::CaptureRevoked => "capture_revoked",
        }
    }
}
