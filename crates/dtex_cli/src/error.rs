//! Fatal error taxonomy and its mapping to exit codes.

use dtex_config::ConfigError;
use dtex_driver::DriverError;
use dtex_workspace::WorkspaceError;

/// Usage text printed when no arguments are given.
pub const USAGE: &str = "\
Usage: dtex [tex options] file.tex

will compile file.tex as many times as necessary: until all the generated
temporary files don't change anymore, with a maximum of 5 compilations.

Usage: dtex -clean

will remove all temporary files used by this program.";

/// Broad category of a fatal error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed invocation.
    Usage,
    /// Filesystem failure in the workspace, tracker, finalizer, or clean-up.
    Io,
    /// The engine could not be run or exited unsuccessfully.
    Compile,
    /// The settings file was unreadable or invalid.
    Config,
}

/// The first fatal error of a run.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    /// No arguments at all.
    #[error("{}", USAGE)]
    NoArguments,

    /// The caller tried to set the output directory the driver injects.
    #[error("{0:?} flag not allowed")]
    ReservedOption(String),

    /// Settings could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A workspace operation failed.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// The convergence loop failed.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl FatalError {
    /// Categorizes the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoArguments
            | Self::ReservedOption(_)
            | Self::Workspace(WorkspaceError::InvalidDocument { .. }) => ErrorKind::Usage,
            Self::Config(_) => ErrorKind::Config,
            Self::Workspace(_) | Self::Driver(DriverError::Workspace(_)) => ErrorKind::Io,
            Self::Driver(_) => ErrorKind::Compile,
        }
    }

    /// Every fatal error exits with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Captured output of a failed engine pass.
    pub fn engine_output(&self) -> Option<&[u8]> {
        match self {
            Self::Driver(e) => e.engine_output(),
            _ => None,
        }
    }
}
