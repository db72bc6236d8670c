//! Recording pointer capture host for testing.
//!
//! Behaves like a real host (one owner at a time, stale grants ignored) and
//! counts every call so tests can assert on capture pairing.

use crate::error::CaptureError;
use crate::traits::{CaptureGrant, CaptureRequest, ControlId, PointerCapture};

/// In-memory pointer capture host.
///
/// # Example
///
/// ```
/// use dragnum::adapters::mock::MockPointerCapture;
/// use dragnum::gesture::{Axis, GestureController, PointerButton};
/// use dragnum::traits::{ControlId, PointerCapture};
///
/// let mut host = MockPointerCapture::new();
/// let mut controller = GestureController::new(ControlId::new(1), Axis::Horizontal);
///
/// controller.press(&mut host, PointerButton::Primary);
/// assert_eq!(host.owner(), Some(ControlId::new(1)));
///
/// controller.release(&mut host);
/// assert_eq!(host.release_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockPointerCapture {
    owner: Option<ControlId>,
    generation: u64,
    deny: bool,
    requests: Vec<CaptureRequest>,
    releases: usize,
    stale_releases: usize,
    revocations: usize,
}

impl MockPointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that refuses every request.
    pub fn denying() -> Self {
        Self {
            deny: true,
            ..Self::default()
        }
    }

    /// Configure whether requests should be refused.
    pub fn set_deny(&mut self, deny: bool) {
        self.deny = deny;
    }

    /// Force-revoke capture, as a focus change would.
    ///
    /// Returns the control that lost capture.
    pub fn revoke(&mut self) -> Option<ControlId> {
        let previous = self.owner.take();
        if previous.is_some() {
            self.revocations += 1;
        }
        previous
    }

    pub fn is_captured(&self) -> bool {
        self.owner.is_some()
    }

    /// Every request received, granted or not.
    pub fn requests(&self) -> &[CaptureRequest] {
        &self.requests
    }

    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    /// Releases that actually gave capture back.
    pub fn release_count(&self) -> usize {
        self.releases
    }

    /// Releases of grants the host had already revoked or superseded.
    pub fn stale_release_count(&self) -> usize {
        self.stale_releases
    }

    pub fn revocation_count(&self) -> usize {
        self.revocations
    }
}

impl PointerCapture for MockPointerCapture {
    fn request_capture(&mut self, request: CaptureRequest) -> Result<CaptureGrant, CaptureError> {
        self.requests.push(request);

        if self.deny {
            return Err(CaptureError::Denied("mock host denies capture".to_string()));
        }

        if let Some(owner) = self.owner {
            if owner != request.owner {
                return Err(CaptureError::Held { owner });
            }
        }

        self.generation += 1;
        self.owner = Some(request.owner);
        Ok(CaptureGrant::new(request.owner, self.generation))
    }

    fn release_capture(&mut self, grant: CaptureGrant) {
        if self.owner == Some(grant.owner()) && grant.generation() == self.generation {
            self.owner = None;
            self.releases += 1;
        } else {
            self.stale_releases += 1;
        }
    }

    fn owner(&self) -> Option<ControlId> {
        self.owner
    }
}
