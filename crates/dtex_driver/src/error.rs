//! Error types for the convergence loop.

use dtex_workspace::WorkspaceError;

/// Errors that abort the convergence loop.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The engine binary could not be started.
    #[error("compilation error: failed to run {engine}: {source}")]
    Spawn {
        /// The engine binary name.
        engine: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The engine ran and exited unsuccessfully.
    #[error("compilation error: {engine} {status}")]
    EngineFailed {
        /// The engine binary name.
        engine: String,
        /// Human-readable exit status, e.g. `exit status: 1`.
        status: String,
        /// The engine's captured stdout followed by its stderr.
        output: Vec<u8>,
    },

    /// Snapshotting the workspace failed.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

impl DriverError {
    /// The captured engine output, if the engine got far enough to produce any.
    pub fn engine_output(&self) -> Option<&[u8]> {
        match self {
            Self::EngineFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_failed_display() {
        let err = DriverError::EngineFailed {
            engine: "pdflatex".to_string(),
            status: "exit status: 1".to_string(),
            output: b"! Undefined control sequence.".to_vec(),
        };
        assert_eq!(
            err.to_string(),
            "compilation error: pdflatex exit status: 1"
        );
        assert_eq!(
            err.engine_output(),
            Some(&b"! Undefined control sequence."[..])
        );
    }

    #[test]
    fn spawn_has_no_output() {
        let err = DriverError::Spawn {
            engine: "nosuchtex".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("failed to run nosuchtex"));
        assert!(err.engine_output().is_none());
    }
}
