//! Artifact hashing and change detection between engine passes.
//!
//! After every pass the tracker rehashes the document's auxiliary files in
//! the workspace and records whether any of them is new or differs from the
//! previous pass. The driver stops once a pass leaves everything unchanged.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use dtex_common::ContentHash;
use tracing::debug;

use crate::error::WorkspaceError;
use crate::workspace::{Workspace, LOG_EXT, OUTPUT_EXT};

/// Snapshot of artifact hashes for one workspace directory.
///
/// Entries are only ever added or overwritten. A file that disappears keeps
/// its last recorded hash.
#[derive(Debug)]
pub struct ConvergenceTracker {
    dir: PathBuf,
    prefix: Vec<u8>,
    hashes: HashMap<PathBuf, ContentHash>,
    changed: bool,
}

impl ConvergenceTracker {
    /// Creates a tracker for `workspace` and takes the initial snapshot.
    ///
    /// The tracker starts out changed regardless of what the snapshot found,
    /// so the engine always runs at least once.
    pub fn new(workspace: &Workspace) -> Result<Self, WorkspaceError> {
        let mut prefix = workspace.base_name().as_encoded_bytes().to_vec();
        prefix.push(b'.');
        let mut tracker = Self {
            dir: workspace.dir().to_path_buf(),
            prefix,
            hashes: HashMap::new(),
            changed: false,
        };
        debug!("computing initial hashes of {}", workspace.base().display());
        tracker.update()?;
        tracker.changed = true;
        Ok(tracker)
    }

    /// Rehashes every tracked artifact and recomputes the changed flag.
    pub fn update(&mut self) -> Result<(), WorkspaceError> {
        self.changed = false;
        for path in self.artifacts()? {
            let hash = hash_file(&path)?;
            debug!("hashing {} -> {hash}", path.display());
            if self.hashes.insert(path, hash) != Some(hash) {
                debug!("  file changed");
                self.changed = true;
            }
        }
        debug!("{} artifact(s) tracked", self.tracked_count());
        Ok(())
    }

    /// Whether the most recent [`update`](Self::update) saw a new or modified artifact.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Number of artifacts ever recorded by this tracker.
    pub fn tracked_count(&self) -> usize {
        self.hashes.len()
    }

    /// Lists `<base>.*` files in the workspace directory, skipping the output
    /// and the log. Sorted for deterministic logs.
    pub fn artifacts(&self) -> Result<Vec<PathBuf>, WorkspaceError> {
        let scan_err = |e| WorkspaceError::Scan {
            path: self.dir.clone(),
            source: e,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(scan_err)? {
            let entry = entry.map_err(scan_err)?;
            let path = entry.path();
            if path.is_file() && self.is_tracked(&entry.file_name(), &path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn is_tracked(&self, name: &OsStr, path: &Path) -> bool {
        if !name.as_encoded_bytes().starts_with(&self.prefix) {
            return false;
        }
        !matches!(
            path.extension().and_then(OsStr::to_str),
            Some(OUTPUT_EXT) | Some(LOG_EXT)
        )
    }
}

fn hash_file(path: &Path) -> Result<ContentHash, WorkspaceError> {
    let content = std::fs::read(path).map_err(|e| WorkspaceError::Hash {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(ContentHash::from_bytes(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::DocumentIdentity;

    fn make_workspace() -> (tempfile::TempDir, Workspace) {
        let root = tempfile::tempdir().unwrap();
        let id = DocumentIdentity::resolve_from(Path::new("paper.tex"), Some(Path::new("/doc")))
            .unwrap();
        let ws = Workspace::resolve(root.path(), &id).unwrap();
        (root, ws)
    }

    #[test]
    fn fresh_tracker_reports_changed() {
        let (_root, ws) = make_workspace();
        let tracker = ConvergenceTracker::new(&ws).unwrap();
        assert!(tracker.changed());
        assert_eq!(tracker.tracked_count(), 0);
    }

    #[test]
    fn fresh_tracker_reports_changed_over_stable_artifacts() {
        let (_root, ws) = make_workspace();
        std::fs::write(ws.artifact("aux"), "\\relax").unwrap();
        let tracker = ConvergenceTracker::new(&ws).unwrap();
        assert!(tracker.changed());
        assert_eq!(tracker.tracked_count(), 1);
    }

    #[test]
    fn identical_content_converges() {
        let (_root, ws) = make_workspace();
        let mut tracker = ConvergenceTracker::new(&ws).unwrap();

        std::fs::write(ws.artifact("aux"), "\\newlabel{a}{{1}{1}}").unwrap();
        tracker.update().unwrap();
        assert!(tracker.changed(), "new artifact counts as a change");

        tracker.update().unwrap();
        assert!(!tracker.changed());
    }

    #[test]
    fn single_byte_modification_is_detected() {
        let (_root, ws) = make_workspace();
        std::fs::write(ws.artifact("toc"), "\\contentsline{section}{1}").unwrap();
        let mut tracker = ConvergenceTracker::new(&ws).unwrap();
        tracker.update().unwrap();
        assert!(!tracker.changed());

        std::fs::write(ws.artifact("toc"), "\\contentsline{section}{2}").unwrap();
        tracker.update().unwrap();
        assert!(tracker.changed());
    }

    #[test]
    fn output_log_and_foreign_files_are_ignored() {
        let (_root, ws) = make_workspace();
        let mut tracker = ConvergenceTracker::new(&ws).unwrap();
        tracker.update().unwrap();

        std::fs::write(ws.output_artifact(), "%PDF").unwrap();
        std::fs::write(ws.artifact(LOG_EXT), "This is pdfTeX").unwrap();
        std::fs::write(ws.dir().join("other.aux"), "\\relax").unwrap();
        std::fs::write(ws.dir().join("paper-blx.bib"), "@comment").unwrap();
        std::fs::create_dir(ws.artifact("d")).unwrap();

        tracker.update().unwrap();
        assert!(!tracker.changed());
        assert!(tracker.artifacts().unwrap().is_empty());
    }

    #[test]
    fn multi_dot_artifacts_are_tracked() {
        let (_root, ws) = make_workspace();
        std::fs::write(ws.artifact("synctex.gz"), [0x1f, 0x8b]).unwrap();
        let tracker = ConvergenceTracker::new(&ws).unwrap();
        assert_eq!(
            tracker.artifacts().unwrap(),
            vec![ws.artifact("synctex.gz")]
        );
    }

    #[test]
    fn deleted_artifacts_keep_their_hash() {
        let (_root, ws) = make_workspace();
        std::fs::write(ws.artifact("aux"), "a").unwrap();
        std::fs::write(ws.artifact("out"), "b").unwrap();
        let mut tracker = ConvergenceTracker::new(&ws).unwrap();
        assert_eq!(tracker.tracked_count(), 2);

        std::fs::remove_file(ws.artifact("out")).unwrap();
        tracker.update().unwrap();
        assert!(!tracker.changed());
        assert_eq!(tracker.tracked_count(), 2);
    }

    #[test]
    fn missing_workspace_dir_is_a_scan_error() {
        let (root, ws) = make_workspace();
        std::fs::remove_dir_all(root.path().join("doc")).unwrap();
        let err = ConvergenceTracker::new(&ws).unwrap_err();
        assert!(matches!(err, WorkspaceError::Scan { .. }));
    }

    #[test]
    fn hash_file_nonexistent_errors() {
        let err = hash_file(Path::new("/nonexistent/paper.aux")).unwrap_err();
        assert!(matches!(err, WorkspaceError::Hash { .. }));
    }

    #[test]
    fn hash_file_matches_content_hash() {
        let (_root, ws) = make_workspace();
        std::fs::write(ws.artifact("aux"), "\\relax").unwrap();
        let hash = hash_file(&ws.artifact("aux")).unwrap();
        assert_eq!(hash, ContentHash::from_bytes(b"\\relax"));
    }
}
