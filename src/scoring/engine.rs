// Scoring engine
//
// responses -> per-response preference -> category scores
//           -> dimension balance -> (x, y) coordinates

use chrono::Utc;
use std::collections::{HashMap, HashSet};

use super::preference::{ResolvedResponse, SliderValue};
use super::types::{AssessmentScore, CategoryScore, Coordinates, DimensionScore, Response};
use crate::config::constants::MAX_PREFERENCE_STRENGTH;
use crate::config::PhraseConfig;
use crate::errors::{AssessmentError, Result};
use crate::generator::GeneratedQuestion;

/// Score a completed assessment. All-or-nothing: any unresolvable response
/// fails the whole computation.
pub fn score_assessment(
    questions: &[GeneratedQuestion],
    responses: &[Response],
    config: &PhraseConfig,
) -> Result<AssessmentScore> {
    ScoringEngine::new(config).score(questions, responses)
}

pub struct ScoringEngine<'a> {
    config: &'a PhraseConfig,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(config: &'a PhraseConfig) -> Self {
        Self { config }
    }

    pub fn score(
        &self,
        questions: &[GeneratedQuestion],
        responses: &[Response],
    ) -> Result<AssessmentScore> {
        self.config.validate_dimensions()?;

        let resolved = self.resolve_responses(questions, responses)?;
        let category_scores = self.category_scores(&resolved);
        let dimension_scores = self.dimension_scores(&category_scores);
        let coordinates = self.coordinates(&dimension_scores);

        tracing::info!(
            "Scored {} response(s): x={:.3}, y={:.3}",
            resolved.len(),
            coordinates.x,
            coordinates.y
        );

        Ok(AssessmentScore {
            category_scores,
            dimension_scores,
            coordinates,
            total_questions: responses.len(),
            completed_at: Utc::now(),
        })
    }

    /// Step 1: match every response to its question and both phrases to categories
    pub fn resolve_responses(
        &self,
        questions: &[GeneratedQuestion],
        responses: &[Response],
    ) -> Result<Vec<ResolvedResponse>> {
        let by_id: HashMap<&str, &GeneratedQuestion> =
            questions.iter().map(|q| (q.id.as_str(), q)).collect();
        let mut answered = HashSet::new();
        let mut resolved = Vec::with_capacity(responses.len());

        for response in responses {
            let question = by_id
                .get(response.question_id.as_str())
                .ok_or_else(|| AssessmentError::UnknownQuestion(response.question_id.clone()))?;

            if !answered.insert(response.question_id.as_str()) {
                return Err(AssessmentError::DuplicateResponse(response.question_id.clone()));
            }

            let value = SliderValue::new(response.value)?;
            let left = self.category_for(question, &question.left_phrase)?;
            let right = self.category_for(question, &question.right_phrase)?;
            let entry = ResolvedResponse::new(&question.id, value, left, right);

            tracing::debug!(
                "{}: value {} -> {} (strength {})",
                entry.question_id,
                entry.value,
                entry.preferred_category.as_deref().unwrap_or("neutral"),
                entry.strength
            );
            resolved.push(entry);
        }

        Ok(resolved)
    }

    fn category_for(&self, question: &GeneratedQuestion, phrase: &str) -> Result<&'a str> {
        self.config
            .category_of(phrase)
            .map(|set| set.category.as_str())
            .ok_or_else(|| AssessmentError::unknown_phrase(&question.id, phrase))
    }

    /// Step 2: raw and normalized score for every configured category
    pub fn category_scores(&self, responses: &[ResolvedResponse]) -> Vec<CategoryScore> {
        self.config
            .phrase_sets
            .iter()
            .map(|set| {
                let category = set.category.as_str();
                let raw_score: u32 = responses
                    .iter()
                    .filter(|r| r.preferred_category.as_deref() == Some(category))
                    .map(|r| r.strength as u32)
                    .sum();
                let question_count = responses.iter().filter(|r| r.involves(category)).count() as u32;

                let max_possible = question_count * MAX_PREFERENCE_STRENGTH as u32;
                let normalized_score = if max_possible > 0 {
                    raw_score as f64 / max_possible as f64
                } else {
                    0.0
                };

                CategoryScore {
                    category: set.category.clone(),
                    dimension: set.dimension.clone(),
                    raw_score,
                    normalized_score,
                    question_count,
                }
            })
            .collect()
    }

    /// Step 3: balance between the two categories of every dimension
    pub fn dimension_scores(&self, category_scores: &[CategoryScore]) -> Vec<DimensionScore> {
        let lookup = |name: &str| category_scores.iter().find(|c| c.category == name);

        self.config
            .dimensions
            .iter()
            .filter_map(|dimension| {
                let (cat1, cat2) = dimension.pair()?;
                let score1 = lookup(cat1);
                let score2 = lookup(cat2);

                let cat1_score = score1.map(|s| s.normalized_score).unwrap_or(0.0);
                let cat2_score = score2.map(|s| s.normalized_score).unwrap_or(0.0);
                let total_questions = score1.map(|s| s.question_count).unwrap_or(0)
                    + score2.map(|s| s.question_count).unwrap_or(0);

                Some(DimensionScore {
                    dimension: dimension.name.clone(),
                    category1: cat1.to_string(),
                    category2: cat2.to_string(),
                    category1_score: cat1_score,
                    category2_score: cat2_score,
                    dimension_balance: balance(cat1_score, cat2_score),
                    total_questions,
                })
            })
            .collect()
    }

    /// Step 4: project the two configured axis dimensions onto x and y
    pub fn coordinates(&self, dimension_scores: &[DimensionScore]) -> Coordinates {
        if self.config.dimensions.len() < 2 {
            return Coordinates::default();
        }

        let axes = &self.config.settings().axes;
        let balance_of = |name: &str| {
            dimension_scores
                .iter()
                .find(|d| d.dimension == name)
                .map(|d| d.dimension_balance)
                .unwrap_or(0.0)
        };

        Coordinates::new(balance_of(&axes.x), balance_of(&axes.y))
    }
}

/// (b - a) / (a + b), or 0 when both are zero
pub fn balance(a: f64, b: f64) -> f64 {
    let total = a + b;
    if total > 0.0 {
        (b - a) / total
    } else {
        0.0
    }
}
