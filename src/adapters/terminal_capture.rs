//! Pointer capture for a crossterm terminal.
//!
//! Terminals have no real pointer lock, so capture here means two things:
//! the process-wide ownership record (only one control may drag at a time)
//! and the pointer shape, switched through OSC 22 to the axis' resize shape
//! while a drag holds capture. Terminals without OSC 22 ignore the sequence.

use std::fmt;
use std::io::{self, Write};

use crossterm::{execute, Command};
use tracing::{trace, warn};

use crate::error::CaptureError;
use crate::traits::{CaptureGrant, CaptureRequest, ControlId, PointerCapture};

/// Pointer shape restored when capture ends.
pub const DEFAULT_POINTER_SHAPE: &str = "default";

/// OSC 22: set the mouse pointer shape (xterm, kitty, foot, WezTerm).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPointerShape<'a>(pub &'a str);

impl Command for SetPointerShape<'_> {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b]22;{}\x1b\\", self.0)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Exclusive pointer capture backed by a terminal writer.
pub struct TerminalPointerCapture<W: Write> {
    writer: W,
    owner: Option<ControlId>,
    generation: u64,
    pointer_shapes: bool,
}

impl<W: Write> TerminalPointerCapture<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            owner: None,
            generation: 0,
            pointer_shapes: true,
        }
    }

    /// Enable or disable the OSC 22 pointer shape side effect.
    pub fn with_pointer_shapes(mut self, enabled: bool) -> Self {
        self.pointer_shapes = enabled;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Force-revoke capture (focus lost, terminal suspended, ...).
    ///
    /// Returns the control that lost capture so its owner can be told.
    pub fn revoke(&mut self) -> Option<ControlId> {
        let previous = self.owner.take()?;
        trace!(control = %previous, "terminal revoked pointer capture");
        self.restore_shape();
        Some(previous)
    }

    fn set_shape(&mut self, shape: &str) -> io::Result<()> {
        if !self.pointer_shapes {
            return Ok(());
        }
        execute!(self.writer, SetPointerShape(shape))
    }

    fn restore_shape(&mut self) {
        if let Err(e) = self.set_shape(DEFAULT_POINTER_SHAPE) {
            warn!("Failed to restore pointer shape: {}", e);
        }
    }
}

impl<W: Write> PointerCapture for TerminalPointerCapture<W> {
    fn request_capture(&mut self, request: CaptureRequest) -> Result<CaptureGrant, CaptureError> {
        if let Some(owner) = self.owner {
            // A repeated request from the owner supersedes its earlier grant
            if owner != request.owner {
                return Err(CaptureError::Held { owner });
            }
        }

        self.set_shape(request.axis.pointer_shape())?;

        self.generation += 1;
        self.owner = Some(request.owner);
        Ok(CaptureGrant::new(request.owner, self.generation))
    }

    fn release_capture(&mut self, grant: CaptureGrant) {
        if self.owner != Some(grant.owner()) || grant.generation() != self.generation {
            trace!(
                control = %grant.owner(),
                generation = grant.generation(),
                "ignoring stale capture release"
            );
            return;
        }

        self.owner = None;
        self.restore_shape();
    }

    fn owner(&self) -> Option<ControlId> {
        self.owner
    }
}

impl<W: Write> fmt::Debug for TerminalPointerCapture<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalPointerCapture")
            .field("owner", &self.owner)
            .field("generation", &self.generation)
            .field("pointer_shapes", &self.pointer_shapes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Axis;

    fn request(id: u32, axis: Axis) -> CaptureRequest {
        CaptureRequest {
            owner: ControlId::new(id),
            axis,
        }
    }

    fn output(host: &TerminalPointerCapture<Vec<u8>>) -> String {
        String::from_utf8_lossy(host.writer()).into_owned()
    }

    #[test]
    fn test_capture_sets_axis_shape() {
        let mut host = TerminalPointerCapture::new(Vec::new());
        let _grant = host.request_capture(request(1, Axis::Vertical)).unwrap();

        assert_eq!(output(&host), "\x1b]22;ns-resize\x1b\\");
        assert_eq!(host.owner(), Some(ControlId::new(1)));
    }

    #[test]
    fn test_release_restores_default_shape() {
        let mut host = TerminalPointerCapture::new(Vec::new());
        let grant = host.request_capture(request(1, Axis::Horizontal)).unwrap();
        host.release_capture(grant);

        assert_eq!(
            output(&host),
            "\x1b]22;ew-resize\x1b\\\x1b]22;default\x1b\\"
        );
        assert_eq!(host.owner(), None);
    }

    #[test]
    fn test_second_control_is_refused() {
        let mut host = TerminalPointerCapture::new(Vec::new());
        let _grant = host.request_capture(request(1, Axis::Horizontal)).unwrap();

        let err = host.request_capture(request(2, Axis::Horizontal)).unwrap_err();
        assert!(err.is_contention());
        assert_eq!(host.owner(), Some(ControlId::new(1)));
    }

    #[test]
    fn test_revoke_then_stale_release() {
        let mut host = TerminalPointerCapture::new(Vec::new());
        let grant = host.request_capture(request(3, Axis::Horizontal)).unwrap();

        assert_eq!(host.revoke(), Some(ControlId::new(3)));
        assert_eq!(host.revoke(), None);

        let before = output(&host);
        host.release_capture(grant);
        assert_eq!(output(&host), before, "stale release must not write");
    }

    #[test]
    fn test_shapes_disabled_writes_nothing() {
        let mut host = TerminalPointerCapture::new(Vec::new()).with_pointer_shapes(false);
        let grant = host.request_capture(request(1, Axis::Horizontal)).unwrap();
        host.release_capture(grant);
        assert!(host.into_inner().is_empty());
    }

    #[test]
    fn test_write_failure_refuses_capture() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut host = TerminalPointerCapture::new(Broken);
        let err = host.request_capture(request(1, Axis::Horizontal)).unwrap_err();
        assert!(matches!(err, CaptureError::Io(_)));
        assert_eq!(host.owner(), None);
    }
}
