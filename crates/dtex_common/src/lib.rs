//! Shared foundational types used across the dtex compiler driver.
//!
//! Currently this is the content hash used to decide whether the auxiliary
//! files written by a TeX engine have settled between two passes.

#![warn(missing_docs)]

pub mod hash;

pub use hash::ContentHash;
