// Phrase configuration document
//
// The immutable input to both the generator and the scoring engine:
// categories with their phrases, dimensions pairing two categories,
// style definitions and assessment settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use super::settings::AssessmentSettings;
use super::styles::StyleDefinitions;
use crate::errors::{self, AssessmentError};

/// Two opposing categories measured against each other
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Exactly two entries: `[category A, category B]`
    pub categories: Vec<String>,
}

impl Dimension {
    /// The two categories as a pair; `None` when the dimension is malformed
    pub fn pair(&self) -> Option<(&str, &str)> {
        match self.categories.as_slice() {
            [a, b] => Some((a.as_str(), b.as_str())),
            _ => None,
        }
    }
}

/// The phrases belonging to one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseSet {
    pub category: String,
    #[serde(default)]
    pub dimension: String,
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMetadata {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub total_phrases: usize,
    #[serde(default)]
    pub categories: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
    #[serde(default)]
    pub description: String,
}

/// The full phrase configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseConfig {
    #[serde(default)]
    pub dimensions: Vec<Dimension>,

    pub phrase_sets: Vec<PhraseSet>,

    #[serde(default)]
    pub assessment_settings: AssessmentSettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_definitions: Option<StyleDefinitions>,

    #[serde(default)]
    pub metadata: ConfigMetadata,
}

impl PhraseConfig {
    /// Load a phrase configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read phrase configuration: {}", path.display()))?;

        Self::from_json_str(&contents)
            .with_context(|| format!("Failed to parse phrase configuration: {}", path.display()))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PhraseConfig =
            serde_json::from_str(json).context("Phrase configuration is not valid JSON")?;
        Ok(config)
    }

    /// The phrase document shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(include_str!("../../data/phrases.json"))
            .context("Failed to parse builtin phrase configuration")
    }

    pub fn settings(&self) -> &AssessmentSettings {
        &self.assessment_settings
    }

    /// Style table from the document, or the built-in table when absent
    pub fn style_definitions(&self) -> Cow<'_, StyleDefinitions> {
        match &self.style_definitions {
            Some(defs) => Cow::Borrowed(defs),
            None => Cow::Owned(StyleDefinitions::builtin()),
        }
    }

    /// Every phrase in document order; positions here are phrase indices
    pub fn flatten_phrases(&self) -> Vec<&str> {
        self.phrase_sets
            .iter()
            .flat_map(|set| set.phrases.iter().map(String::as_str))
            .collect()
    }

    pub fn phrases_by_category(&self, category: &str) -> &[String] {
        self.phrase_set(category)
            .map(|set| set.phrases.as_slice())
            .unwrap_or(&[])
    }

    pub fn phrase_set(&self, category: &str) -> Option<&PhraseSet> {
        self.phrase_sets.iter().find(|set| set.category == category)
    }

    pub fn categories(&self) -> Vec<&str> {
        self.phrase_sets.iter().map(|set| set.category.as_str()).collect()
    }

    /// The phrase set a phrase belongs to
    pub fn category_of(&self, phrase: &str) -> Option<&PhraseSet> {
        self.phrase_sets
            .iter()
            .find(|set| set.phrases.iter().any(|p| p == phrase))
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    /// Upper bound on questions the pool supports under the current settings
    pub fn max_possible_questions(&self) -> usize {
        let total = self.flatten_phrases().len();
        let settings = self.settings();

        if settings.allow_duplicate_phrases {
            settings
                .max_question_count
                .min(total * total.saturating_sub(1) / 2)
        } else {
            settings.max_question_count.min(total / 2)
        }
    }

    /// Default question count bounded by what the pool can produce
    pub fn recommended_question_count(&self) -> usize {
        self.settings()
            .default_question_count
            .min(self.max_possible_questions())
    }

    /// Check every dimension names two categories that exist
    pub fn validate_dimensions(&self) -> errors::Result<()> {
        let categories: HashSet<&str> = self.categories().into_iter().collect();

        for dimension in &self.dimensions {
            let (a, b) = dimension.pair().ok_or_else(|| {
                AssessmentError::invalid_dimension(
                    &dimension.name,
                    format!(
                        "expected exactly 2 categories, found {}",
                        dimension.categories.len()
                    ),
                )
            })?;

            for category in [a, b] {
                if !categories.contains(category) {
                    return Err(AssessmentError::invalid_dimension(
                        &dimension.name,
                        format!("references missing category '{}'", category),
                    ));
                }
            }

            if a == b {
                return Err(AssessmentError::invalid_dimension(
                    &dimension.name,
                    format!("category '{}' cannot oppose itself", a),
                ));
            }
        }

        Ok(())
    }

    /// Structural validation of the whole document
    pub fn validate(&self) -> errors::Result<()> {
        if self.phrase_sets.is_empty() {
            return Err(AssessmentError::InvalidConfig("no phrase sets defined".to_string()));
        }

        let mut seen_categories = HashSet::new();
        let mut seen_phrases: HashMap<&str, &str> = HashMap::new();

        for (idx, set) in self.phrase_sets.iter().enumerate() {
            if set.category.trim().is_empty() {
                return Err(AssessmentError::InvalidConfig(format!(
                    "phrase set {} is missing a category",
                    idx + 1
                )));
            }
            if !seen_categories.insert(set.category.as_str()) {
                return Err(AssessmentError::InvalidConfig(format!(
                    "category '{}' is defined twice",
                    set.category
                )));
            }
            if set.phrases.len() < 2 {
                return Err(AssessmentError::InvalidConfig(format!(
                    "phrase set '{}' needs at least 2 phrases",
                    set.category
                )));
            }
            for phrase in &set.phrases {
                if let Some(other) = seen_phrases.insert(phrase.as_str(), set.category.as_str()) {
                    return Err(AssessmentError::InvalidConfig(format!(
                        "phrase '{}' appears in both '{}' and '{}'",
                        phrase, other, set.category
                    )));
                }
            }
        }

        self.validate_dimensions()
    }
}
