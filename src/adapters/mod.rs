//! Concrete implementations of the host traits in `crate::traits`.
//!
//! # Adapters
//!
//! - [`TerminalPointerCapture`] - exclusive capture for a crossterm terminal
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockPointerCapture`] - recording capture host

pub mod mock;
pub mod terminal_capture;

pub use mock::MockPointerCapture;
pub use terminal_capture::{SetPointerShape, TerminalPointerCapture};
