//! Workspace resolution and clean-up under the temporary root.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::WorkspaceError;
use crate::identity::{with_suffix, DocumentIdentity};

/// Extension of the final output artifact; never tracked, moved out at the end.
pub const OUTPUT_EXT: &str = "pdf";

/// Extension of the engine log; never tracked.
pub const LOG_EXT: &str = "log";

/// An isolated directory holding one document's engine artifacts.
///
/// The layout mirrors the document identity: `/home/me/paper` compiles into
/// `<temp_root>/home/me/`, where the engine writes `paper.aux`, `paper.pdf`
/// and friends. Workspaces are kept after a run so the next run starts from
/// the previous artifacts.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// `<temp_root>/<identity without volume>`, no extension.
    base: PathBuf,
}

impl Workspace {
    /// Computes the workspace base path without touching the filesystem.
    pub fn base_path(temp_root: &Path, identity: &DocumentIdentity) -> PathBuf {
        temp_root.join(identity.without_volume())
    }

    /// Resolves the workspace for `identity`, creating its directory if absent.
    pub fn resolve(temp_root: &Path, identity: &DocumentIdentity) -> Result<Self, WorkspaceError> {
        let base = Self::base_path(temp_root, identity);
        let workspace = Self { base };
        let dir = workspace.dir();
        debug!("creating workspace {}", dir.display());
        std::fs::create_dir_all(dir).map_err(|e| WorkspaceError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        Ok(workspace)
    }

    /// The extension-less base path of the document inside the workspace.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// The directory the engine is told to write into.
    pub fn dir(&self) -> &Path {
        self.base.parent().unwrap_or(&self.base)
    }

    /// The document base name every tracked artifact starts with.
    pub fn base_name(&self) -> &OsStr {
        self.base.file_name().unwrap_or_default()
    }

    /// Path of an artifact with the given extension inside the workspace.
    pub fn artifact(&self, ext: &str) -> PathBuf {
        with_suffix(&self.base, ext)
    }

    /// Path of the output artifact the engine produces.
    pub fn output_artifact(&self) -> PathBuf {
        self.artifact(OUTPUT_EXT)
    }
}

/// Removes the whole temporary root and every workspace under it.
///
/// Returns `false` when there was nothing to remove.
pub fn clean(temp_root: &Path) -> Result<bool, WorkspaceError> {
    info!("rm -r {}", temp_root.display());
    match std::fs::remove_dir_all(temp_root) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(WorkspaceError::Clean {
            path: temp_root.to_path_buf(),
            source: e,
        }),
    }
}
