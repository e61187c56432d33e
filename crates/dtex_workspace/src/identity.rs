//! Document identity: the normalized key a workspace is derived from.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use tracing::warn;

use crate::error::WorkspaceError;

/// Source extension stripped from the document argument.
pub const SOURCE_EXT: &str = "tex";

/// The resolved, extension-less absolute path of the document being compiled.
///
/// `paper.tex`, `./paper`, and `/home/me/paper.tex` run from `/home/me` all
/// resolve to the same identity `/home/me/paper`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentIdentity {
    path: PathBuf,
}

impl DocumentIdentity {
    /// Resolves a document argument against the current working directory.
    pub fn resolve(document: &Path) -> Result<Self, WorkspaceError> {
        let cwd = std::env::current_dir();
        if let Err(ref e) = cwd {
            warn!("absolute path({}): {e}", document.display());
        }
        Self::resolve_from(document, cwd.ok().as_deref())
    }

    /// Resolves a document argument against `cwd`.
    ///
    /// Without a working directory a relative document falls back to its bare
    /// file name.
    pub fn resolve_from(document: &Path, cwd: Option<&Path>) -> Result<Self, WorkspaceError> {
        let invalid = || WorkspaceError::InvalidDocument {
            path: document.to_path_buf(),
        };

        let stripped = if document.extension() == Some(OsStr::new(SOURCE_EXT)) {
            document.with_extension("")
        } else {
            document.to_path_buf()
        };

        let absolute = if stripped.is_absolute() {
            stripped
        } else {
            match cwd {
                Some(cwd) => cwd.join(stripped),
                None => PathBuf::from(stripped.file_name().ok_or_else(invalid)?),
            }
        };

        let path = normalize(&absolute);
        if path.file_name().is_none() {
            return Err(invalid());
        }
        Ok(Self { path })
    }

    /// The absolute identity path, without extension.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document's base name, shared by every artifact the engine writes.
    pub fn base_name(&self) -> &OsStr {
        // resolve_from rejects paths without a file name
        self.path.file_name().unwrap_or_default()
    }

    /// The identity with any root and volume prefix removed.
    pub fn without_volume(&self) -> PathBuf {
        self.path
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect()
    }

    /// The caller-visible path of an artifact with the given extension.
    pub fn sibling(&self, ext: &str) -> PathBuf {
        with_suffix(&self.path, ext)
    }
}

/// Appends `.ext` without touching any dot already in the file name.
pub(crate) fn with_suffix(path: &Path, ext: &str) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

/// Folds `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
