//! dragnum - drag-to-adjust numeric controls for the terminal
//!
//! The gesture core lives in [`gesture`]; [`traits::PointerCapture`] is the
//! seam to the host that grants exclusive pointer capture. The remaining
//! modules make up the interactive demo.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod gesture;
pub mod logging;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
