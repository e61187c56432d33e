//! Per-document workspaces and convergence tracking.
//!
//! Every document gets its own directory under the temporary root, keyed by
//! its resolved path. The TeX engine writes its auxiliary files there, the
//! [`ConvergenceTracker`] hashes them between passes, and [`finalize`] moves
//! the produced PDF back next to the source once the passes are done.

#![warn(missing_docs)]

pub mod error;
pub mod finalize;
pub mod identity;
pub mod tracker;
pub mod workspace;

pub use error::WorkspaceError;
pub use finalize::finalize;
pub use identity::DocumentIdentity;
pub use tracker::ConvergenceTracker;
pub use workspace::{clean, Workspace, LOG_EXT, OUTPUT_EXT};
