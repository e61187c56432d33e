//! Settings loading: defaults, then the optional TOML file, then the environment.

use crate::error::ConfigError;
use crate::types::{FileConfig, Settings, CONFIG_VAR, ENGINE_VAR, VERBOSE_VAR};
use std::path::Path;

/// Loads settings from the real process environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_with(|key| std::env::var(key).ok())
}

/// Loads settings using `lookup` to read environment variables.
///
/// Useful for testing without touching the process environment. Empty values
/// are treated as unset, so `TEX=` keeps the configured engine.
pub fn load_settings_with<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

    let file = match var(CONFIG_VAR) {
        Some(path) => load_file_config(Path::new(&path))?,
        None => FileConfig::default(),
    };

    let mut settings = Settings::default();
    if let Some(engine) = file.engine {
        settings.engine = engine;
    }
    if let Some(temp_root) = file.temp_root {
        settings.temp_root = temp_root;
    }
    if let Some(verbose) = file.verbose {
        settings.verbose = verbose;
    }

    if let Some(engine) = var(ENGINE_VAR) {
        settings.engine = engine;
    }
    if var(VERBOSE_VAR).is_some() {
        settings.verbose = true;
    }

    Ok(settings)
}

/// Reads and validates a TOML configuration file.
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_file_config_from_str(&content)
}

/// Parses and validates a TOML configuration from a string.
pub fn load_file_config_from_str(content: &str) -> Result<FileConfig, ConfigError> {
    let config: FileConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &FileConfig) -> Result<(), ConfigError> {
    if matches!(config.engine.as_deref(), Some(e) if e.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "engine must not be empty".to_string(),
        ));
    }
    if matches!(config.temp_root.as_deref(), Some(p) if p.as_os_str().is_empty()) {
        return Err(ConfigError::ValidationError(
            "temp_root must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let s = load_settings_with(env(&[])).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn tex_overrides_engine() {
        let s = load_settings_with(env(&[("TEX", "lualatex")])).unwrap();
        assert_eq!(s.engine, "lualatex");
    }

    #[test]
    fn empty_tex_is_ignored() {
        let s = load_settings_with(env(&[("TEX", "")])).unwrap();
        assert_eq!(s.engine, "pdflatex");
    }

    #[test]
    fn any_non_empty_verbose_enables_tracing() {
        fn verbose(value: &str) -> bool {
            let s = load_settings_with(env(&[("VERBOSE", value)])).unwrap();
            s.verbose
        }
        assert!(verbose("1"));
        assert!(verbose("no"));
        assert!(!verbose(""));
    }

    #[test]
    fn parse_full_file() {
        let toml = r#"
engine = "xelatex"
temp_root = "/var/tmp/dtex"
verbose = true
"#;
        let f = load_file_config_from_str(toml).unwrap();
        assert_eq!(f.engine.as_deref(), Some("xelatex"));
        assert_eq!(f.temp_root, Some(PathBuf::from("/var/tmp/dtex")));
        assert_eq!(f.verbose, Some(true));
    }

    #[test]
    fn unknown_key_errors() {
        let err = load_file_config_from_str("max_passes = 9").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_file_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn empty_engine_errors() {
        let err = load_file_config_from_str("engine = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn file_values_apply_and_environment_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dtex.toml");
        std::fs::write(
            &path,
            "engine = \"xelatex\"\ntemp_root = \"/scratch/dtex\"\n",
        )
        .unwrap();
        let path_str = path.to_str().unwrap();

        let s = load_settings_with(env(&[("DTEX_CONFIG", path_str)])).unwrap();
        assert_eq!(s.engine, "xelatex");
        assert_eq!(s.temp_root, PathBuf::from("/scratch/dtex"));
        assert!(!s.verbose);

        let lookup = env(&[("DTEX_CONFIG", path_str), ("TEX", "lualatex")]);
        let s = load_settings_with(lookup).unwrap();
        assert_eq!(s.engine, "lualatex");
        assert_eq!(s.temp_root, PathBuf::from("/scratch/dtex"));
    }

    #[test]
    fn missing_config_file_errors() {
        let lookup = env(&[("DTEX_CONFIG", "/nonexistent/dtex.toml")]);
        let err = load_settings_with(lookup).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
