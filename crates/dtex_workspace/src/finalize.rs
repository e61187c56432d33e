//! Moving the finished output out of the workspace.

use std::path::PathBuf;

use tracing::info;

use crate::error::WorkspaceError;
use crate::identity::DocumentIdentity;
use crate::workspace::{Workspace, OUTPUT_EXT};

/// Moves `<workspace base>.pdf` next to the source document.
///
/// This is a single rename. There is no copy fallback, so a workspace on a
/// different filesystem than the document fails here. Returns the
/// destination path.
pub fn finalize(
    workspace: &Workspace,
    identity: &DocumentIdentity,
) -> Result<PathBuf, WorkspaceError> {
    let from = workspace.output_artifact();
    let to = identity.sibling(OUTPUT_EXT);
    info!("moving {} to {}", from.display(), to.display());
    std::fs::rename(&from, &to).map_err(|e| WorkspaceError::Relocate {
        from,
        to: to.clone(),
        source: e,
    })?;
    Ok(to)
}
