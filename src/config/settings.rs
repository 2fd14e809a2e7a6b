// Assessment settings carried inside the phrase configuration document

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_MAX_QUESTION_COUNT, DEFAULT_QUESTION_COUNT,
    DEFAULT_X_AXIS_DIMENSION, DEFAULT_Y_AXIS_DIMENSION,
};

/// How phrases are paired into questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PairingStrategy {
    /// Shuffle every phrase into one pool and pair neighbours
    #[default]
    Random,
    /// Accepted for older documents; generated like `Random`
    CategoryMixed,
    /// Accepted for older documents; generated like `Random`
    CategoryExclusive,
    /// Pair the two categories of each dimension, grouped into phases
    DimensionFocused,
}

impl PairingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairingStrategy::Random => "random",
            PairingStrategy::CategoryMixed => "category-mixed",
            PairingStrategy::CategoryExclusive => "category-exclusive",
            PairingStrategy::DimensionFocused => "dimension-focused",
        }
    }
}

/// Names of the two dimensions plotted as x and y
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default = "default_x_axis")]
    pub x: String,
    #[serde(default = "default_y_axis")]
    pub y: String,
}

fn default_x_axis() -> String {
    DEFAULT_X_AXIS_DIMENSION.to_string()
}

fn default_y_axis() -> String {
    DEFAULT_Y_AXIS_DIMENSION.to_string()
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            x: default_x_axis(),
            y: default_y_axis(),
        }
    }
}

/// Assessment settings; every field falls back to a default when absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSettings {
    #[serde(default = "default_question_count")]
    pub default_question_count: usize,

    #[serde(default = "default_max_question_count")]
    pub max_question_count: usize,

    /// Only widens the computed question ceiling; the generators never reuse a phrase
    #[serde(default)]
    pub allow_duplicate_phrases: bool,

    #[serde(default)]
    pub pairing_strategy: PairingStrategy,

    #[serde(default)]
    pub ensure_equal_dimension_coverage: bool,

    #[serde(default)]
    pub axes: AxisConfig,
}

fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}

fn default_max_question_count() -> usize {
    DEFAULT_MAX_QUESTION_COUNT
}

impl Default for AssessmentSettings {
    fn default() -> Self {
        Self {
            default_question_count: DEFAULT_QUESTION_COUNT,
            max_question_count: DEFAULT_MAX_QUESTION_COUNT,
            allow_duplicate_phrases: false,
            pairing_strategy: PairingStrategy::Random,
            ensure_equal_dimension_coverage: false,
            axes: AxisConfig::default(),
        }
    }
}

impl AssessmentSettings {
    /// True when the dimension-focused generator should run
    pub fn wants_dimension_coverage(&self) -> bool {
        self.pairing_strategy == PairingStrategy::DimensionFocused
            && self.ensure_equal_dimension_coverage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_from_empty_json() {
        let settings: AssessmentSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AssessmentSettings::default());
        assert_eq!(settings.axes.x, "Uncertainty Attitude");
        assert_eq!(settings.axes.y, "Possibility Attitude");
    }

    #[test]
    fn test_pairing_strategy_kebab_case() {
        let json = r#"{"pairingStrategy": "dimension-focused", "ensureEqualDimensionCoverage": true}"#;
        let settings: AssessmentSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.pairing_strategy, PairingStrategy::DimensionFocused);
        assert!(settings.wants_dimension_coverage());
        assert_eq!(settings.pairing_strategy.as_str(), "dimension-focused");
    }

    #[test]
    fn test_dimension_focused_needs_coverage_flag() {
        let settings = AssessmentSettings {
            pairing_strategy: PairingStrategy::DimensionFocused,
            ..Default::default()
        };
        assert!(!settings.wants_dimension_coverage());
    }

    #[test]
    fn test_custom_axes() {
        let json = r#"{"axes": {"x": "Tempo"}}"#;
        let settings: AssessmentSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.axes.x, "Tempo");
        assert_eq!(settings.axes.y, "Possibility Attitude");
    }

    #[test]
    fn test_legacy_min_question_count_is_ignored() {
        let json = r#"{"minQuestionCount": 4, "maxQuestionCount": 12}"#;
        let settings: AssessmentSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.max_question_count, 12);
        assert_eq!(settings.default_question_count, AssessmentSettings::default().default_question_count);
    }
}
