//! Error types for plotting setup.
//!
//! Rendering itself never fails; errors only arise while loading a
//! configuration, turning its color strings into draw colors, or encoding a
//! finished canvas.

use std::path::PathBuf;
use thiserror::Error;

/// Plot setup or export error.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Color string could not be parsed.
    #[error("invalid color '{value}': {reason}")]
    ColorParse {
        /// The offending string.
        value: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Configuration file does not exist.
    #[error("config not found: {path}")]
    ConfigNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// YAML parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Image encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for plot setup and export.
pub type PlotResult<T> = Result<T, PlotError>;
