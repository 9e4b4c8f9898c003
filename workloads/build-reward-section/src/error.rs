//! Error types for the section workload.

use thiserror::Error;

/// Errors raised while setting up the section.
#[derive(Error, Debug)]
pub enum SectionError {
    /// A configuration value failed validation.
    #[error("Invalid config value for '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },
}
