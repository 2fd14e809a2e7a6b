// Application configuration (~/.kinetic/config.toml)

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::constants::{APP_DIR_NAME, DEFAULT_NEUTRAL_THRESHOLD};
use super::phrases::PhraseConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Phrase configuration document; the builtin document when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrases_path: Option<PathBuf>,

    /// Directory holding stored assessment results
    pub results_dir: PathBuf,

    /// Half-width of the neutral band used when interpreting coordinates
    #[serde(default = "default_neutral_threshold")]
    pub neutral_threshold: f64,

    /// Correlating code attached to every saved result (e.g. a workshop code)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,

    #[serde(default)]
    pub debug_logging: bool,
}

fn default_neutral_threshold() -> f64 {
    DEFAULT_NEUTRAL_THRESHOLD
}

impl Config {
    /// Defaults rooted at the given application directory
    pub fn with_app_dir(app_dir: PathBuf) -> Self {
        Self {
            phrases_path: None,
            results_dir: app_dir.join("results"),
            neutral_threshold: DEFAULT_NEUTRAL_THRESHOLD,
            custom_code: None,
            debug_logging: false,
        }
    }

    pub fn app_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(APP_DIR_NAME))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.neutral_threshold.is_finite()
            || self.neutral_threshold < 0.0
            || self.neutral_threshold >= 1.0
        {
            bail!(
                "neutral_threshold ({}) must be in the range [0, 1)",
                self.neutral_threshold
            );
        }

        if let Some(ref path) = self.phrases_path {
            if !path.exists() {
                bail!("Phrase configuration not found: {}", path.display());
            }
        }

        if let Some(ref code) = self.custom_code {
            if code.trim().is_empty() {
                bail!("custom_code must not be blank; remove it to disable");
            }
        }

        Ok(())
    }

    /// Load the phrase document this config points at
    pub fn load_phrases(&self) -> Result<PhraseConfig> {
        let phrases = match &self.phrases_path {
            Some(path) => PhraseConfig::load_from_file(path)?,
            None => PhraseConfig::builtin()?,
        };

        phrases
            .validate()
            .context("Phrase configuration validation failed")?;

        Ok(phrases)
    }

    /// Save to config.toml inside the given application directory
    pub fn save_to(&self, app_dir: &std::path::Path) -> Result<PathBuf> {
        fs::create_dir_all(app_dir)
            .with_context(|| format!("Failed to create {}", app_dir.display()))?;

        let config_path = app_dir.join("config.toml");
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&config_path, toml_string)?;

        tracing::info!("Configuration saved to {:?}", config_path);
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::with_app_dir(PathBuf::from("/tmp/kinetic-test"));
        config.validate().unwrap();
        assert_eq!(config.results_dir, PathBuf::from("/tmp/kinetic-test/results"));
        assert!((config.neutral_threshold - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let mut config = Config::with_app_dir(PathBuf::from("/tmp/kinetic-test"));
        config.neutral_threshold = 1.5;
        assert!(config.validate().is_err());
        config.neutral_threshold = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_custom_code_rejected() {
        let mut config = Config::with_app_dir(PathBuf::from("/tmp/kinetic-test"));
        config.custom_code = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builtin_phrases_load() {
        let config = Config::with_app_dir(PathBuf::from("/tmp/kinetic-test"));
        let phrases = config.load_phrases().unwrap();
        assert_eq!(phrases.phrase_sets.len(), 4);
    }

    #[test]
    fn test_toml_roundtrip_keeps_fields() {
        let mut config = Config::with_app_dir(PathBuf::from("/tmp/kinetic-test"));
        config.custom_code = Some("TEAM-7".to_string());
        let text = toml::to_string_pretty(&config).unwrap();
        let decoded: Config = toml::from_str(&text).unwrap();
        assert_eq!(decoded, config);
    }
}
