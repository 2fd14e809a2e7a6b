// Question generator: random and dimension-focused pairing strategies

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

use super::question::{GeneratedQuestion, PoolPhrase};
use super::seed::seed_from_str;
use crate::config::PhraseConfig;
use crate::errors::{AssessmentError, Result};

/// Generate questions for a phrase configuration with a fresh entropy-seeded RNG
pub fn generate_questions(
    config: &PhraseConfig,
    count: Option<usize>,
) -> Result<Vec<GeneratedQuestion>> {
    QuestionGenerator::new().generate(config, count)
}

/// Pairs phrases into questions. Holds only the RNG; the configuration is
/// passed in on every call.
pub struct QuestionGenerator<R: Rng> {
    rng: R,
}

impl QuestionGenerator<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator: the same seed string yields the same assessment
    pub fn seeded(seed: &str) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed_from_str(seed)),
        }
    }
}

impl Default for QuestionGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate an assessment. `count` defaults to the configuration's
    /// recommended question count.
    pub fn generate(
        &mut self,
        config: &PhraseConfig,
        count: Option<usize>,
    ) -> Result<Vec<GeneratedQuestion>> {
        config.validate_dimensions()?;

        let settings = config.settings();
        let count = count.unwrap_or_else(|| config.recommended_question_count());

        if settings.wants_dimension_coverage() && !config.dimensions.is_empty() {
            tracing::info!(
                "Generating {} questions using {} strategy",
                count,
                settings.pairing_strategy.as_str()
            );
            return self.dimension_focused(config, count);
        }

        if settings.wants_dimension_coverage() {
            tracing::warn!("Dimension coverage requested but no dimensions defined; pairing randomly");
        }
        tracing::info!("Generating {} questions using random strategy", count);
        self.random(config, count)
    }

    /// Shuffle the whole pool and pair neighbours. No phrase is used twice.
    pub fn random(
        &mut self,
        config: &PhraseConfig,
        count: usize,
    ) -> Result<Vec<GeneratedQuestion>> {
        let pool = config.flatten_phrases();
        let actual = count.min(pool.len() / 2);

        if actual == 0 {
            return Err(AssessmentError::insufficient_phrases(count, pool.len()));
        }

        let mut order: Vec<usize> = (0..pool.len()).collect();
        order.shuffle(&mut self.rng);

        let questions = order
            .chunks_exact(2)
            .take(actual)
            .enumerate()
            .map(|(i, pair)| {
                let first = PoolPhrase {
                    text: pool[pair[0]],
                    index: pair[0],
                };
                let second = PoolPhrase {
                    text: pool[pair[1]],
                    index: pair[1],
                };
                GeneratedQuestion::place(i + 1, first, second, self.rng.gen_bool(0.5), None)
            })
            .collect();

        Ok(questions)
    }

    /// Pair category A against category B within each dimension, one phase
    /// per dimension in configuration order.
    pub fn dimension_focused(
        &mut self,
        config: &PhraseConfig,
        count: usize,
    ) -> Result<Vec<GeneratedQuestion>> {
        config.validate_dimensions()?;

        if config.dimensions.is_empty() {
            return self.random(config, count);
        }

        let pool = config.flatten_phrases();
        let offsets = category_offsets(config);
        let per_dimension = count / config.dimensions.len();
        let mut questions = Vec::with_capacity(count);

        for (dim_idx, dimension) in config.dimensions.iter().enumerate() {
            // validate_dimensions guarantees a pair of known categories
            let Some((cat_a, cat_b)) = dimension.pair() else {
                continue;
            };
            let mut side_a = indices_for(&offsets, cat_a);
            let mut side_b = indices_for(&offsets, cat_b);
            side_a.shuffle(&mut self.rng);
            side_b.shuffle(&mut self.rng);

            let pairs = per_dimension.min(side_a.len()).min(side_b.len());
            tracing::debug!(
                "Phase {} ({}): {} pair(s) of {} vs {}",
                dim_idx + 1,
                dimension.name,
                pairs,
                cat_a,
                cat_b
            );

            for (&a, &b) in side_a.iter().zip(side_b.iter()).take(pairs) {
                let first = PoolPhrase { text: pool[a], index: a };
                let second = PoolPhrase { text: pool[b], index: b };
                let first_on_left = self.rng.gen_bool(0.5);
                questions.push(GeneratedQuestion::place(
                    questions.len() + 1,
                    first,
                    second,
                    first_on_left,
                    Some(dim_idx + 1),
                ));
            }
        }

        if questions.is_empty() {
            return Err(AssessmentError::insufficient_phrases(count, pool.len()));
        }

        Ok(questions)
    }
}

/// Start offset and length of each category in the flattened pool
fn category_offsets(config: &PhraseConfig) -> HashMap<&str, (usize, usize)> {
    let mut offsets = HashMap::new();
    let mut start = 0;
    for set in &config.phrase_sets {
        offsets
            .entry(set.category.as_str())
            .or_insert((start, set.phrases.len()));
        start += set.phrases.len();
    }
    offsets
}

fn indices_for(offsets: &HashMap<&str, (usize, usize)>, category: &str) -> Vec<usize> {
    offsets
        .get(category)
        .map(|&(start, len)| (start..start + len).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssessmentSettings, ConfigMetadata, Dimension, PairingStrategy, PhraseSet};
    use std::collections::HashSet;

    fn two_dimension_config(per_category: usize) -> PhraseConfig {
        let categories = [
            ("Reason", "Uncertainty Attitude"),
            ("Play", "Uncertainty Attitude"),
            ("Structure", "Possibility Attitude"),
            ("Openness", "Possibility Attitude"),
        ];
        PhraseConfig {
            dimensions: vec![
                Dimension {
                    name: "Uncertainty Attitude".to_string(),
                    description: String::new(),
                    categories: vec!["Reason".to_string(), "Play".to_string()],
                },
                Dimension {
                    name: "Possibility Attitude".to_string(),
                    description: String::new(),
                    categories: vec!["Structure".to_string(), "Openness".to_string()],
                },
            ],
            phrase_sets: categories
                .iter()
                .map(|(category, dimension)| PhraseSet {
                    category: category.to_string(),
                    dimension: dimension.to_string(),
                    phrases: (0..per_category)
                        .map(|i| format!("{} phrase {}", category, i))
                        .collect(),
                })
                .collect(),
            assessment_settings: AssessmentSettings::default(),
            style_definitions: None,
            metadata: ConfigMetadata::default(),
        }
    }

    fn focused(mut config: PhraseConfig) -> PhraseConfig {
        config.assessment_settings.pairing_strategy = PairingStrategy::DimensionFocused;
        config.assessment_settings.ensure_equal_dimension_coverage = true;
        config
    }

    #[test]
    fn test_random_never_reuses_a_phrase() {
        let config = two_dimension_config(5);
        for seed in 0..25 {
            let mut generator = QuestionGenerator::with_rng(StdRng::seed_from_u64(seed));
            let questions = generator.random(&config, 10).unwrap();
            assert_eq!(questions.len(), 10);

            let mut used = HashSet::new();
            for q in &questions {
                assert!(used.insert(q.left_phrase_index), "reused {}", q.left_phrase_index);
                assert!(used.insert(q.right_phrase_index), "reused {}", q.right_phrase_index);
            }
        }
    }

    #[test]
    fn test_random_caps_at_half_the_pool() {
        let config = two_dimension_config(3); // 12 phrases
        let mut generator = QuestionGenerator::with_rng(StdRng::seed_from_u64(3));
        let questions = generator.random(&config, 50).unwrap();
        assert_eq!(questions.len(), 6);
    }

    #[test]
    fn test_indices_match_phrase_text() {
        let config = two_dimension_config(4);
        let pool = config.flatten_phrases();
        let questions = QuestionGenerator::seeded("idx").generate(&config, Some(6)).unwrap();
        for q in questions {
            assert_eq!(pool[q.left_phrase_index], q.left_phrase);
            assert_eq!(pool[q.right_phrase_index], q.right_phrase);
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let config = two_dimension_config(4);
        let questions = QuestionGenerator::seeded("ids").generate(&config, Some(4)).unwrap();
        let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3", "q4"]);
    }

    #[test]
    fn test_default_count_uses_recommendation() {
        let config = two_dimension_config(4);
        let questions = QuestionGenerator::seeded("default").generate(&config, None).unwrap();
        assert_eq!(questions.len(), config.recommended_question_count());
    }

    #[test]
    fn test_dimension_focused_groups_by_dimension() {
        let config = focused(two_dimension_config(3));
        let questions = QuestionGenerator::seeded("phases").generate(&config, Some(4)).unwrap();

        assert_eq!(questions.len(), 4);
        let phases: Vec<Option<usize>> = questions.iter().map(|q| q.phase).collect();
        assert_eq!(phases, vec![Some(1), Some(1), Some(2), Some(2)]);

        for q in &questions[..2] {
            let cats: HashSet<&str> = [q.left_phrase.as_str(), q.right_phrase.as_str()]
                .iter()
                .map(|p| config.category_of(p).unwrap().category.as_str())
                .collect();
            assert_eq!(cats, HashSet::from(["Reason", "Play"]));
        }
    }

    #[test]
    fn test_dimension_focused_bounded_by_shorter_category() {
        let mut config = focused(two_dimension_config(3));
        config.phrase_sets[1].phrases.truncate(2); // Play has only 2
        let questions = QuestionGenerator::seeded("short").generate(&config, Some(10)).unwrap();
        let phase_one = questions.iter().filter(|q| q.phase == Some(1)).count();
        let phase_two = questions.iter().filter(|q| q.phase == Some(2)).count();
        assert_eq!(phase_one, 2);
        assert_eq!(phase_two, 3);
    }

    #[test]
    fn test_focused_without_coverage_flag_is_random() {
        let mut config = two_dimension_config(3);
        config.assessment_settings.pairing_strategy = PairingStrategy::DimensionFocused;
        let questions = QuestionGenerator::seeded("flag").generate(&config, Some(4)).unwrap();
        assert!(questions.iter().all(|q| q.phase.is_none()));
    }

    #[test]
    fn test_insufficient_phrases() {
        let mut config = two_dimension_config(2);
        config.dimensions.clear();
        config.phrase_sets.truncate(1);
        config.phrase_sets[0].phrases.truncate(1);

        let err = QuestionGenerator::seeded("tiny").generate(&config, Some(3)).unwrap_err();
        assert_eq!(err, AssessmentError::insufficient_phrases(3, 1));
    }

    #[test]
    fn test_focused_count_below_dimension_count_fails() {
        let config = focused(two_dimension_config(3));
        let err = QuestionGenerator::seeded("one").generate(&config, Some(1)).unwrap_err();
        assert!(matches!(err, AssessmentError::InsufficientPhrases { .. }));
    }

    #[test]
    fn test_invalid_dimension_rejected() {
        let mut config = two_dimension_config(3);
        config.dimensions[1].categories[1] = "Chaos".to_string();
        let err = QuestionGenerator::seeded("bad").generate(&config, Some(4)).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidDimension { .. }));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = two_dimension_config(5);
        let a = QuestionGenerator::seeded("workshop-42").generate(&config, Some(8)).unwrap();
        let b = QuestionGenerator::seeded("workshop-42").generate(&config, Some(8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_both_sides_get_used() {
        // With a fair coin the first phrase must land on each side at some point
        let config = two_dimension_config(10);
        let mut generator = QuestionGenerator::with_rng(StdRng::seed_from_u64(99));
        let mut left_lower = 0;
        let mut left_higher = 0;
        for _ in 0..20 {
            for q in generator.random(&config, 20).unwrap() {
                if q.left_phrase_index < q.right_phrase_index {
                    left_lower += 1;
                } else {
                    left_higher += 1;
                }
            }
        }
        assert!(left_lower > 100);
        assert!(left_higher > 100);
    }

    #[test]
    fn test_random_can_open_with_any_phrase() {
        let config = two_dimension_config(5);
        let mut generator = QuestionGenerator::with_rng(StdRng::seed_from_u64(7));
        let mut seen = HashSet::new();
        for _ in 0..400 {
            let first = &generator.random(&config, 1).unwrap()[0];
            seen.insert(first.left_phrase_index);
            seen.insert(first.right_phrase_index);
        }
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn test_focused_draws_every_phrase_of_a_category() {
        let config = focused(two_dimension_config(6));
        let mut generator = QuestionGenerator::with_rng(StdRng::seed_from_u64(11));
        let mut seen = HashSet::new();
        for _ in 0..200 {
            // One pair per dimension: only a shuffled category reaches every phrase
            for q in generator.generate(&config, Some(2)).unwrap() {
                seen.insert(q.left_phrase_index.min(q.right_phrase_index));
            }
        }
        // Reason occupies 0..6, Structure 12..18
        assert!((0..6).all(|i| seen.contains(&i)));
        assert!((12..18).all(|i| seen.contains(&i)));
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = two_dimension_config(5);
        let a = QuestionGenerator::seeded("alpha").generate(&config, Some(10)).unwrap();
        let b = QuestionGenerator::seeded("beta").generate(&config, Some(10)).unwrap();
        assert_ne!(a, b);
    }
}
