// Configuration loader
// Loads ~/.kinetic/config.toml, falling back to defaults when it is absent

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::app::Config;

/// Load configuration from ~/.kinetic/config.toml or defaults
pub fn load_config() -> Result<Config> {
    let app_dir = Config::app_dir()?;
    load_config_from(&app_dir)
}

/// Load configuration from `<app_dir>/config.toml`, or defaults rooted at `app_dir`
pub fn load_config_from(app_dir: &Path) -> Result<Config> {
    let config_path = app_dir.join("config.toml");

    if !config_path.exists() {
        tracing::debug!("No config at {:?}; using defaults", config_path);
        return Ok(Config::with_app_dir(app_dir.to_path_buf()));
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read configuration: {}", config_path.display()))?;

    // results_dir may be omitted in hand-written files
    #[derive(serde::Deserialize)]
    struct TomlConfig {
        #[serde(default)]
        phrases_path: Option<std::path::PathBuf>,
        #[serde(default)]
        results_dir: Option<std::path::PathBuf>,
        #[serde(default)]
        neutral_threshold: Option<f64>,
        #[serde(default)]
        custom_code: Option<String>,
        #[serde(default)]
        debug_logging: bool,
    }

    let toml_config: TomlConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    let mut config = Config::with_app_dir(app_dir.to_path_buf());
    config.phrases_path = toml_config.phrases_path;
    if let Some(dir) = toml_config.results_dir {
        config.results_dir = dir;
    }
    if let Some(threshold) = toml_config.neutral_threshold {
        config.neutral_threshold = threshold;
    }
    config.custom_code = toml_config.custom_code;
    config.debug_logging = toml_config.debug_logging;

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.results_dir, dir.path().join("results"));
        assert!(config.phrases_path.is_none());
    }

    #[test]
    fn test_partial_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "neutral_threshold = 0.2\ncustom_code = \"WS-1\"\ndebug_logging = true\n",
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert!((config.neutral_threshold - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.custom_code.as_deref(), Some("WS-1"));
        assert!(config.debug_logging);
        assert_eq!(config.results_dir, dir.path().join("results"));
    }

    #[test]
    fn test_invalid_threshold_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "neutral_threshold = 3.0\n").unwrap();
        assert!(load_config_from(dir.path()).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::with_app_dir(dir.path().to_path_buf());
        config.custom_code = Some("ROUNDTRIP".to_string());
        config.save_to(dir.path()).unwrap();

        let loaded = load_config_from(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
