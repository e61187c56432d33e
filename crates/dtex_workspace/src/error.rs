//! Error types for workspace operations.

use std::path::PathBuf;

/// Errors that can occur while preparing, scanning, or finalizing a workspace.
///
/// All of these are fatal for the run. The workspace is left untouched so it
/// can be inspected afterwards.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    /// The document path has no file name to derive a workspace from.
    #[error("invalid document path {path}")]
    InvalidDocument {
        /// The path as given by the caller.
        path: PathBuf,
    },

    /// The workspace directory could not be created.
    #[error("create temporary directory ({path}): {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The workspace directory could not be listed.
    #[error("scan workspace ({path}): {source}")]
    Scan {
        /// The workspace directory.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A tracked artifact could not be read for hashing.
    #[error("read file ({path}): {source}")]
    Hash {
        /// The artifact path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The output artifact could not be moved out of the workspace.
    #[error("move resulting pdf into place ({from} -> {to}): {source}")]
    Relocate {
        /// The artifact inside the workspace.
        from: PathBuf,
        /// The caller-visible destination.
        to: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The temporary root could not be removed.
    #[error("clean temporary files ({path}): {source}")]
    Clean {
        /// The temporary root.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
