// Command-line interface: argument parsing and subcommand handlers

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::quiz::{run_quiz, QuizOutcome};
use crate::config::{Config, PhraseConfig};
use crate::generator::{GeneratedQuestion, QuestionGenerator};
use crate::scoring::{
    interpret_coordinates_with, interpret_dimension_score, score_assessment, AssessmentScore,
    Coordinates, DimensionInterpretation, Response, StyleInterpretation,
};
use crate::session::AssessmentSession;
use crate::storage::{JsonlResultStore, ResultRecord, ResultStore};

#[derive(Debug, Parser)]
#[command(name = "kinetic", version, about = "Phrase-pair style assessment")]
pub struct Cli {
    /// Phrase configuration JSON (overrides phrases_path from config.toml)
    #[arg(long, global = true)]
    pub phrases: Option<PathBuf>,

    /// Directory holding config.toml (default: ~/.kinetic)
    #[arg(long, global = true)]
    pub app_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a question set as JSON
    Generate {
        #[arg(short, long)]
        count: Option<usize>,
        /// Seed string for a reproducible question set
        #[arg(long)]
        seed: Option<String>,
    },
    /// Score a question set against a response list
    Score {
        #[arg(long)]
        questions: PathBuf,
        #[arg(long)]
        responses: PathBuf,
        /// Persist the result to the result store
        #[arg(long)]
        save: bool,
        /// Respondent email; only the domain is stored
        #[arg(long)]
        email: Option<String>,
    },
    /// Interpret a coordinate pair
    Interpret {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Take the assessment interactively
    Take {
        #[arg(short, long)]
        count: Option<usize>,
        #[arg(long)]
        seed: Option<String>,
        /// Do not persist the result
        #[arg(long)]
        no_save: bool,
    },
    /// Show stored results and analytics for a custom code
    Results {
        #[arg(long)]
        code: Option<String>,
    },
    /// Validate the phrase configuration
    Validate,
}

/// Everything printed after scoring
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub score: AssessmentScore,
    pub interpretation: StyleInterpretation,
    pub dimensions: Vec<DimensionInterpretation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_id: Option<String>,
}

impl ScoreReport {
    pub fn build(score: AssessmentScore, phrases: &PhraseConfig, neutral_threshold: f64) -> Self {
        let interpretation = interpret_coordinates_with(score.coordinates, phrases, neutral_threshold);
        let dimensions = score
            .dimension_scores
            .iter()
            .map(interpret_dimension_score)
            .collect();

        Self {
            score,
            interpretation,
            dimensions,
            saved_id: None,
        }
    }

    fn save(
        &mut self,
        config: &Config,
        email: Option<&str>,
        assessment_id: Option<String>,
    ) -> Result<()> {
        let store = JsonlResultStore::new(config.results_dir.clone())?;
        let mut record =
            ResultRecord::from_score(&self.score, &self.interpretation, config.custom_code.clone());
        if let Some(email) = email {
            record = record.with_email(email);
        }
        if let Some(id) = assessment_id {
            record = record.with_assessment_id(id);
        }
        self.saved_id = Some(store.save(&record)?);
        Ok(())
    }
}

pub fn run(cli: Cli, mut config: Config) -> Result<()> {
    if let Some(path) = cli.phrases {
        config.phrases_path = Some(path);
        config.validate()?;
    }

    match cli.command {
        Command::Generate { count, seed } => {
            let phrases = config.load_phrases()?;
            let questions = generator_for(seed.as_deref()).generate(&phrases, count)?;
            print_json(&questions)
        }
        Command::Score {
            questions,
            responses,
            save,
            email,
        } => {
            let phrases = config.load_phrases()?;
            let questions: Vec<GeneratedQuestion> = read_json(&questions)?;
            let responses: Vec<Response> = read_json(&responses)?;

            let score = score_assessment(&questions, &responses, &phrases)?;
            let mut report = ScoreReport::build(score, &phrases, config.neutral_threshold);
            if save {
                report.save(&config, email.as_deref(), None)?;
            }
            print_json(&report)
        }
        Command::Interpret { x, y, threshold } => {
            if !(-1.0..=1.0).contains(&x) || !(-1.0..=1.0).contains(&y) {
                bail!("Coordinates must be within [-1, 1], got ({}, {})", x, y);
            }
            let threshold = neutral_threshold(threshold, &config)?;
            let phrases = config.load_phrases()?;
            let interpretation =
                interpret_coordinates_with(Coordinates::new(x, y), &phrases, threshold);
            print_json(&interpretation)
        }
        Command::Take {
            count,
            seed,
            no_save,
        } => {
            let phrases = config.load_phrases()?;
            let questions = generator_for(seed.as_deref()).generate(&phrases, count)?;
            let mut session = AssessmentSession::new(&phrases, questions)?;

            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            if run_quiz(&mut session, &mut input, &mut output)? == QuizOutcome::Abandoned {
                return Ok(());
            }

            let score = session
                .score()
                .cloned()
                .context("Session completed without a score")?;
            let mut report = ScoreReport::build(score, &phrases, config.neutral_threshold);
            if !no_save {
                report.save(&config, None, Some(session.id().to_string()))?;
            }
            print_summary(&report);
            Ok(())
        }
        Command::Results { code } => {
            let store = JsonlResultStore::new(config.results_dir.clone())?;
            let Some(code) = code.or_else(|| config.custom_code.clone()) else {
                return print_json(&store.all()?);
            };

            #[derive(Serialize)]
            #[serde(rename_all = "camelCase")]
            struct CodeResults {
                custom_code: String,
                analytics: crate::storage::ResultAnalytics,
                results: Vec<ResultRecord>,
            }

            print_json(&CodeResults {
                analytics: store.analytics(&code)?,
                results: store.by_custom_code(&code)?,
                custom_code: code,
            })
        }
        Command::Validate => {
            let phrases = config.load_phrases()?;
            println!(
                "✓ {} categories, {} phrases, {} dimensions",
                phrases.phrase_sets.len(),
                phrases.flatten_phrases().len(),
                phrases.dimensions.len()
            );
            println!(
                "✓ {} strategy, {} questions recommended",
                phrases.settings().pairing_strategy.as_str(),
                phrases.recommended_question_count()
            );
            Ok(())
        }
    }
}

/// Per-call threshold override, held to the same range as `neutral_threshold`
fn neutral_threshold(requested: Option<f64>, config: &Config) -> Result<f64> {
    let Some(threshold) = requested else {
        return Ok(config.neutral_threshold);
    };
    if !threshold.is_finite() || !(0.0..1.0).contains(&threshold) {
        bail!("--threshold ({}) must be in the range [0, 1)", threshold);
    }
    Ok(threshold)
}

fn generator_for(seed: Option<&str>) -> QuestionGenerator<rand::rngs::StdRng> {
    match seed {
        Some(seed) => QuestionGenerator::seeded(seed),
        None => QuestionGenerator::new(),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_summary(report: &ScoreReport) {
    use crossterm::style::Stylize;

    let c = report.score.coordinates;
    println!();
    println!("{}", report.interpretation.style.as_str().bold().green());
    println!("{}", report.interpretation.description);
    if !report.interpretation.traits.is_empty() {
        println!("Traits: {}", report.interpretation.traits.join(", "));
    }
    println!("Position: {} (x = {:.2}, y = {:.2})", report.interpretation.position, c.x, c.y);
    for dimension in &report.dimensions {
        println!("  • {}", dimension.description);
    }
    if let Some(id) = &report.saved_id {
        println!("Saved as {}", id);
    }
}
