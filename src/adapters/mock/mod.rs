//! Mock implementations for testing.
//!
//! - [`MockPointerCapture`] - pointer capture host that records every call

pub mod capture;

pub use capture::MockPointerCapture;
