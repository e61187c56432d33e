//! The pass loop and its state machine.
//!
//! ```text
//! Idle ──changed──▶ Compiling ──exit 0──▶ Snapshotting ──unchanged──▶ Converged
//!                      ▲   │                   │
//!                      │   └─exit ≠ 0─▶ Err    ├──changed, passes left──▶ Compiling
//!                      └───────────────────────┘
//!                                              └──changed, no passes left──▶ CeilingReached
//! ```

use std::ffi::OsString;

use dtex_workspace::ConvergenceTracker;
use tracing::{debug, info};

use crate::engine::Engine;
use crate::error::DriverError;

/// Maximum number of engine passes per run.
pub const MAX_PASSES: u32 = 5;

/// Where the pass loop currently is.
///
/// A failed pass has no state of its own: [`drive`] returns the error
/// immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Before the first pass.
    Idle,
    /// About to invoke the engine.
    Compiling,
    /// About to rehash the artifacts after a successful pass.
    Snapshotting,
    /// The last pass changed nothing.
    Converged,
    /// Passes ran out while artifacts were still changing.
    CeilingReached,
}

impl DriverState {
    /// The state after a snapshot, or on loop entry from `Idle`.
    fn after_snapshot(changed: bool, passes: u32, max_passes: u32) -> Self {
        if !changed {
            Self::Converged
        } else if passes < max_passes {
            Self::Compiling
        } else {
            Self::CeilingReached
        }
    }
}

/// How a completed run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Artifacts reached a fixed point.
    Converged,
    /// The pass ceiling was hit first; the output may have stale references.
    CeilingReached,
}

/// Summary of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriveReport {
    /// Number of engine invocations performed.
    pub passes: u32,
    /// Terminal state of the loop.
    pub outcome: Outcome,
}

impl DriveReport {
    /// Returns `true` if the artifacts stopped changing within the ceiling.
    pub fn converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }
}

/// Runs `engine` with `args` until `tracker` sees no change, at most
/// [`MAX_PASSES`] times.
///
/// A non-zero engine exit aborts the loop with
/// [`DriverError::EngineFailed`]; failed passes are never retried.
pub fn drive<E: Engine>(
    engine: &mut E,
    args: &[OsString],
    tracker: &mut ConvergenceTracker,
) -> Result<DriveReport, DriverError> {
    let mut passes = 0;
    let mut state = DriverState::Idle;

    let outcome = loop {
        let next = match state {
            DriverState::Idle => DriverState::after_snapshot(tracker.changed(), passes, MAX_PASSES),
            DriverState::Compiling => {
                info!("compile iteration {passes}");
                let out = engine.run(args)?;
                if !out.success {
                    return Err(DriverError::EngineFailed {
                        engine: engine.name().to_string(),
                        status: out.status,
                        output: out.output,
                    });
                }
                passes += 1;
                DriverState::Snapshotting
            }
            DriverState::Snapshotting => {
                debug!("updating hashes");
                tracker.update()?;
                DriverState::after_snapshot(tracker.changed(), passes, MAX_PASSES)
            }
            DriverState::Converged => break Outcome::Converged,
            DriverState::CeilingReached => break Outcome::CeilingReached,
        };
        debug!("{state:?} -> {next:?}");
        state = next;
    };
    Ok(DriveReport { passes, outcome })
}
