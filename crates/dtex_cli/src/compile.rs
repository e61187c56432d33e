//! `dtex [tex options] file.tex` — compile to a fixed point.
//!
//! Pipeline:
//! 1. Resolve the document identity and its workspace
//! 2. Inject `-output-directory <workspace>` into the engine arguments
//! 3. Snapshot the workspace and run the convergence loop
//! 4. Warn if the pass ceiling was reached
//! 5. Move the PDF next to the document

use std::ffi::OsString;
use std::path::Path;

use dtex_config::Settings;
use dtex_driver::{compile_args, drive, DriveReport, Engine, ProcessEngine, MAX_PASSES};
use dtex_workspace::{finalize, ConvergenceTracker, DocumentIdentity, Workspace};
use tracing::info;

use crate::error::FatalError;

/// Runs the compile pipeline with the configured engine binary.
pub fn run(
    settings: &Settings,
    options: &[OsString],
    document: &Path,
) -> Result<DriveReport, FatalError> {
    let mut engine = ProcessEngine::new(settings.engine.as_str());
    let identity = DocumentIdentity::resolve(document)?;
    compile_with(&mut engine, &settings.temp_root, options, &identity)
}

/// Runs the compile pipeline for an already resolved document.
pub fn compile_with<E: Engine>(
    engine: &mut E,
    temp_root: &Path,
    options: &[OsString],
    identity: &DocumentIdentity,
) -> Result<DriveReport, FatalError> {
    let workspace = Workspace::resolve(temp_root, identity)?;
    let args = compile_args(workspace.dir(), options);

    let mut tracker = ConvergenceTracker::new(&workspace)?;
    let report = drive(engine, &args, &mut tracker)?;
    info!("{} pass(es), {:?}", report.passes, report.outcome);

    if !report.converged() {
        eprintln!("Warning: {MAX_PASSES} compilations were maybe insufficient");
    }

    finalize(&workspace, identity)?;
    Ok(report)
}
