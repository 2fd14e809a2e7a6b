// CLI module
// Public interface for the command-line interface

mod commands;
mod quiz;

pub use commands::{run, Cli, Command, ScoreReport};
pub use quiz::{run_quiz, QuizOutcome};
