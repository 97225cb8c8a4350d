//! View error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the configuration boundary
///
/// Animation and frame evaluation never fail; degenerate input is clamped or
/// ignored where it occurs.
#[derive(Error, Debug)]
pub enum ViewError {
    /// Failed to read a configuration file
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid TOML or has the wrong shape
    #[error("Failed to parse view config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be written back out
    #[error("Failed to serialize view config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field holds a value the renderer cannot use
    #[error("Invalid view config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

/// Result type for view operations
pub type Result<T> = std::result::Result<T, ViewError>;
