//! Drag axis selection.
//!
//! The axis picks which movement component a control reads and whether the
//! sign is inverted. It is fixed for the lifetime of one control instance.

use serde::{Deserialize, Serialize};

/// The single degree of freedom along which drag movement is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Read horizontal movement as-is (right is positive)
    #[default]
    #[serde(alias = "x")]
    Horizontal,
    /// Read vertical movement sign-inverted (up is positive)
    #[serde(alias = "y")]
    Vertical,
}

impl Axis {
    /// Parse the short `x`/`y` form as well as the full names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "h" | "horizontal" => Some(Axis::Horizontal),
            "y" | "v" | "vertical" => Some(Axis::Vertical),
            _ => None,
        }
    }

    /// Arrow glyphs drawn by the control, decreasing direction first.
    pub fn arrows(self) -> (&'static str, &'static str) {
        match self {
            Axis::Horizontal => ("◀", "▶"),
            Axis::Vertical => ("▲", "▼"),
        }
    }

    /// Pointer shape name shown while a drag on this axis holds capture.
    pub fn pointer_shape(self) -> &'static str {
        match self {
            Axis::Horizontal => "ew-resize",
            Axis::Vertical => "ns-resize",
        }
    }

    /// Short label used in logs and the demo header.
    pub fn short_name(self) -> &'static str {
        match self {
            Axis::Horizontal => "x",
            Axis::Vertical => "y",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}
