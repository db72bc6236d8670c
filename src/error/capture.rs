//! Pointer capture errors.

use std::io;

use thiserror::Error;

use crate::traits::ControlId;

/// Reasons a host can refuse a capture request.
///
/// None of these are surfaced to the control's caller; a refused request
/// means the gesture is not entered.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Another control currently owns pointer capture
    #[error("pointer capture is held by control {owner}")]
    Held { owner: ControlId },

    /// The host denied the request for its own reasons
    #[error("pointer capture denied: {0}")]
    Denied(String),

    /// Writing the capture command to the terminal failed
    #[error("failed to apply pointer capture: {0}")]
    Io(#[from] io::Error),
}

impl CaptureError {
    /// Whether the request could succeed later without any user action.
    ///
    /// Informational only: denied requests are never retried automatically.
    pub fn is_contention(&self) -> bool {
        matches!(self, CaptureError::Held { .. })
    }
}
