//! Runtime settings for the dtex compiler driver.
//!
//! Settings are built once at startup from the process environment and an
//! optional TOML file, then passed explicitly to every component that needs
//! the temporary root or the engine name.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_file_config, load_file_config_from_str, load_settings, load_settings_with};
pub use types::*;
