//! Pointer capture host abstraction.
//!
//! Pointer capture is a single host-wide exclusive resource. A control asks
//! for it when a drag starts and gets back a [`CaptureGrant`], a capability
//! token it must hand back on release. The host may revoke capture at any
//! time without asking; the control then drops its grant and goes idle.

use std::fmt;

use crate::error::CaptureError;
use crate::gesture::Axis;

/// Identifies one control instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u32);

impl ControlId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a control asks for when it requests capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRequest {
    /// The requesting control
    pub owner: ControlId,
    /// Axis of the drag, so the host can pick a matching pointer shape
    pub axis: Axis,
}

/// Capability proving that a control holds pointer capture.
///
/// Not `Clone`: exactly one grant exists per acquisition, and giving it back
/// through [`PointerCapture::release_capture`] consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct CaptureGrant {
    owner: ControlId,
    generation: u64,
}

impl CaptureGrant {
    /// Mint a grant. Called by host implementations only.
    pub fn new(owner: ControlId, generation: u64) -> Self {
        Self { owner, generation }
    }

    pub fn owner(&self) -> ControlId {
        self.owner
    }

    /// Host-assigned acquisition counter, used to spot stale grants.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Host operations the gesture controller invokes.
///
/// Both operations may be called redundantly. `release_capture` has no
/// error path: releasing a grant the host already revoked, or a grant from
/// an older acquisition, must be a silent no-op.
pub trait PointerCapture {
    /// Ask for exclusive pointer capture.
    ///
    /// # Returns
    /// - `Ok(grant)` if capture is now held by `request.owner`
    /// - `Err(error)` if the host refused; the caller stays idle
    fn request_capture(&mut self, request: CaptureRequest) -> Result<CaptureGrant, CaptureError>;

    /// Give capture back.
    fn release_capture(&mut self, grant: CaptureGrant);

    /// The control currently holding capture, if any.
    fn owner(&self) -> Option<ControlId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_id_display() {
        assert_eq!(ControlId::new(7).to_string(), "#7");
        assert_eq!(ControlId::new(7).get(), 7);
    }

    #[test]
    fn test_grant_accessors() {
        let grant = CaptureGrant::new(ControlId::new(2), 41);
        assert_eq!(grant.owner(), ControlId::new(2));
        assert_eq!(grant.generation(), 41);
    }
}
