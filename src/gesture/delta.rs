//! Movement-to-delta mapping.
//!
//! Pure functions only: a raw displacement pair and an axis go in, a signed
//! scalar comes out. No clamping, smoothing, acceleration or unit conversion.

use super::axis::Axis;

/// Raw pointer displacement since the previous sample.
///
/// Supplied by the host for every movement notification and discarded right
/// after the delta is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementSample {
    pub dx: f64,
    pub dy: f64,
}

impl MovementSample {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Displacement between two absolute positions, `to - from`.
    pub fn between(from: (f64, f64), to: (f64, f64)) -> Self {
        Self {
            dx: to.0 - from.0,
            dy: to.1 - from.1,
        }
    }

    /// Whether both components are usable numbers.
    pub fn is_well_formed(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

/// Signed delta for one sample on the given axis.
///
/// Horizontal reads `dx`. Vertical reads `-dy`, so that dragging up on a
/// host where down is the increasing direction yields a positive delta.
pub fn compute_delta(sample: MovementSample, axis: Axis) -> f64 {
    let component = match axis {
        Axis::Horizontal => sample.dx,
        Axis::Vertical => -sample.dy,
    };

    if !component.is_finite() {
        return 0.0;
    }

    // Collapse -0.0 (from negating a zero dy) into 0.0
    component + 0.0
}

/// Delta for a sample that may be missing; missing data counts as no movement.
pub fn delta_or_zero(sample: Option<MovementSample>, axis: Axis) -> f64 {
    sample.map_or(0.0, |s| compute_delta(s, axis))
}
