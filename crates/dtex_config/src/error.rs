//! Error types for settings loading and validation.

use std::path::PathBuf;

/// Errors that can occur when loading the dtex settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file named by `DTEX_CONFIG` could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Io {
        /// The configuration file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}
