//! The convergence loop: run the TeX engine until its artifacts settle.
//!
//! [`drive`] alternates engine passes with [`ConvergenceTracker`] snapshots
//! until a pass leaves every auxiliary file unchanged or [`MAX_PASSES`] is
//! reached. The engine sits behind the [`Engine`] trait so tests can use
//! in-process stubs instead of a TeX installation.
//!
//! [`ConvergenceTracker`]: dtex_workspace::ConvergenceTracker

#![warn(missing_docs)]

pub mod args;
pub mod driver;
pub mod engine;
pub mod error;

pub use args::{compile_args, find_reserved, OUTPUT_DIRECTORY_FLAG};
pub use driver::{drive, DriveReport, DriverState, Outcome, MAX_PASSES};
pub use engine::{Engine, EngineOutput, ProcessEngine};
pub use error::DriverError;
