// Stored result records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{AssessmentScore, StyleInterpretation};

/// What gets persisted for one completed assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: String,
    pub x_coordinate: f64,
    pub y_coordinate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_name: Option<String>,
    /// Correlating code, e.g. a workshop or cohort identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<String>,
    pub completed_at: DateTime<Utc>,
}

impl ResultRecord {
    pub fn from_score(
        score: &AssessmentScore,
        interpretation: &StyleInterpretation,
        custom_code: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            x_coordinate: score.coordinates.x,
            y_coordinate: score.coordinates.y,
            style_name: Some(interpretation.style.clone()),
            custom_code,
            email_domain: None,
            assessment_id: None,
            completed_at: score.completed_at,
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email_domain = extract_email_domain(email);
        self
    }

    pub fn with_assessment_id(mut self, assessment_id: impl Into<String>) -> Self {
        self.assessment_id = Some(assessment_id.into());
        self
    }
}

/// Aggregate view over the records sharing a custom code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultAnalytics {
    pub total_assessments: usize,
    pub avg_x: f64,
    pub avg_y: f64,
    pub first_assessment: Option<DateTime<Utc>>,
    pub last_assessment: Option<DateTime<Utc>>,
}

impl ResultAnalytics {
    pub fn from_records(records: &[ResultRecord]) -> Self {
        let total = records.len();
        let (avg_x, avg_y) = if total > 0 {
            let sum_x: f64 = records.iter().map(|r| r.x_coordinate).sum();
            let sum_y: f64 = records.iter().map(|r| r.y_coordinate).sum();
            (sum_x / total as f64, sum_y / total as f64)
        } else {
            (0.0, 0.0)
        };

        Self {
            total_assessments: total,
            avg_x,
            avg_y,
            first_assessment: records.iter().map(|r| r.completed_at).min(),
            last_assessment: records.iter().map(|r| r.completed_at).max(),
        }
    }
}

/// Lowercased domain part of an email address
pub fn extract_email_domain(email: &str) -> Option<String> {
    let (_, domain) = email.trim().rsplit_once('@')?;
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_lowercase())
    }
}
