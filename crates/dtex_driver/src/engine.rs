//! TeX engine execution abstraction.

use std::ffi::OsString;
use std::process::{Command, Output};

use tracing::debug;

use crate::error::DriverError;

/// Result of one engine invocation.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    /// Whether the engine exited with status zero.
    pub success: bool,
    /// Human-readable exit status.
    pub status: String,
    /// Captured stdout followed by stderr.
    pub output: Vec<u8>,
}

impl From<Output> for EngineOutput {
    fn from(output: Output) -> Self {
        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        Self {
            success: output.status.success(),
            status: output.status.to_string(),
            output: combined,
        }
    }
}

/// Something that can run one compilation pass (allows stubbing in tests).
pub trait Engine {
    /// The engine name used in logs and errors.
    fn name(&self) -> &str;

    /// Runs one pass with the full argument list and waits for it to finish.
    fn run(&mut self, args: &[OsString]) -> Result<EngineOutput, DriverError>;
}

/// Runs the engine as a child process in the current working directory.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    program: String,
}

impl ProcessEngine {
    /// Creates an engine that spawns `program`, looked up on `PATH`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Engine for ProcessEngine {
    fn name(&self) -> &str {
        &self.program
    }

    fn run(&mut self, args: &[OsString]) -> Result<EngineOutput, DriverError> {
        debug!("running {} {:?}", self.program, args);
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| DriverError::Spawn {
                engine: self.program.clone(),
                source: e,
            })?;
        Ok(EngineOutput::from(output))
    }
}
