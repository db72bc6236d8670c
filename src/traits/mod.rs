//! Trait abstractions for the host environment.
//!
//! The gesture core talks to its host only through these traits, so it can
//! run against a real terminal or against test doubles.
//!
//! # Traits
//!
//! - [`PointerCapture`] - exclusive pointer capture request/release

pub mod capture;

pub use capture::{CaptureGrant, CaptureRequest, ControlId, PointerCapture};
