//! Settings types and their defaults.

use serde::Deserialize;
use std::path::PathBuf;

/// Engine invoked when neither `TEX` nor the config file names one.
pub const DEFAULT_ENGINE: &str = "pdflatex";

/// Directory created under the system temporary directory to hold workspaces.
pub const TEMP_ROOT_NAME: &str = "dtex";

/// Environment variable that enables diagnostic tracing when non-empty.
pub const VERBOSE_VAR: &str = "VERBOSE";

/// Environment variable that overrides the engine binary when non-empty.
pub const ENGINE_VAR: &str = "TEX";

/// Environment variable pointing at an optional TOML configuration file.
pub const CONFIG_VAR: &str = "DTEX_CONFIG";

/// Fully resolved settings for one dtex run.
///
/// Constructed once by the front end and handed to the workspace resolver,
/// the clean-up routine, and the driver. Nothing reads the temporary root
/// from ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root directory under which every document workspace lives.
    pub temp_root: PathBuf,
    /// Name or path of the TeX engine binary.
    pub engine: String,
    /// Whether diagnostic tracing is written to stderr.
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            temp_root: default_temp_root(),
            engine: DEFAULT_ENGINE.to_string(),
            verbose: false,
        }
    }
}

/// Returns `<system temp dir>/dtex`.
pub fn default_temp_root() -> PathBuf {
    std::env::temp_dir().join(TEMP_ROOT_NAME)
}

/// Optional overrides read from the TOML file named by `DTEX_CONFIG`.
///
/// Every key is optional; missing keys fall back to [`Settings::default`].
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Engine binary override.
    #[serde(default)]
    pub engine: Option<String>,
    /// Temporary root override.
    #[serde(default)]
    pub temp_root: Option<PathBuf>,
    /// Verbose tracing override.
    #[serde(default)]
    pub verbose: Option<bool>,
}
