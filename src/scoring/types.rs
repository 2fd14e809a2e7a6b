// Scoring data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One slider answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: String,
    /// 0..=10, 5 is neutral. Kept wide so any out-of-range number is
    /// rejected at scoring as `InvalidSliderValue`.
    #[serde(alias = "sliderValue")]
    pub value: i64,
}

impl Response {
    pub fn new(question_id: impl Into<String>, value: impl Into<i64>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
        }
    }
}

/// Point on the style map, both axes in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: String,
    pub dimension: String,
    /// Sum of preference strengths won by this category
    pub raw_score: u32,
    /// raw / (appearances * 5), in [0, 1]
    pub normalized_score: f64,
    /// Responses in which this category appeared on either side
    pub question_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub dimension: String,
    pub category1: String,
    pub category2: String,
    pub category1_score: f64,
    pub category2_score: f64,
    /// -1 = strongly category1, +1 = strongly category2
    pub dimension_balance: f64,
    pub total_questions: u32,
}

/// Final result of one completed assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentScore {
    pub category_scores: Vec<CategoryScore>,
    pub dimension_scores: Vec<DimensionScore>,
    pub coordinates: Coordinates,
    pub total_questions: usize,
    pub completed_at: DateTime<Utc>,
}

impl AssessmentScore {
    pub fn category(&self, name: &str) -> Option<&CategoryScore> {
        self.category_scores.iter().find(|c| c.category == name)
    }

    pub fn dimension(&self, name: &str) -> Option<&DimensionScore> {
        self.dimension_scores.iter().find(|d| d.dimension == name)
    }
}
