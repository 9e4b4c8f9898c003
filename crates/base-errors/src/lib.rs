//! Shared error reporting for landing page sections.
//!
//! This crate provides:
//! - `PlaybackError` - Why the host refused to start media playback
//! - `ErrorReporter` - The capability sections report operational errors to
//! - `LogReporter` - Structured-logging reporter shared across sections

mod error;
mod logging;
mod reporter;

pub use error::*;
pub use logging::*;
pub use reporter::*;
