//! Error types for dragnum.
//!
//! The gesture core itself never fails: malformed movement degrades to a
//! zero delta and a denied capture simply leaves the control idle. Errors
//! only exist at the edges:
//!
//! - **Capture**: the host refused or could not apply pointer capture
//! - **Config**: the configuration file could not be read, parsed or written
//!
//! The binary wraps everything in `color_eyre::Result`.

mod capture;
mod config;

pub use capture::CaptureError;
pub use config::ConfigError;
