// Interactive terminal quiz

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use std::io::{BufRead, Write};

use crate::config::constants::{SLIDER_MAX, SLIDER_MIN, SLIDER_NEUTRAL};
use crate::session::{AssessmentSession, SessionState};

/// How an interactive run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    Completed,
    /// User quit or input ended; nothing to clean up
    Abandoned,
}

/// Drive a session from line-based input until it completes or the user quits
pub fn run_quiz<R: BufRead, W: Write>(
    session: &mut AssessmentSession<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<QuizOutcome> {
    let total = session.questions().len();
    session.start()?;

    writeln!(output, "{}", "Kinetic Style Assessment".bold())?;
    writeln!(
        output,
        "Answer {} to {} for each pair: {} = left, {} = neutral, {} = right. Type q to quit.",
        SLIDER_MIN, SLIDER_MAX, SLIDER_MIN, SLIDER_NEUTRAL, SLIDER_MAX
    )?;

    let mut last_phase = None;

    while let SessionState::InProgress { question_index } = session.state() {
        let phase = session.phase_of(question_index);
        if last_phase != Some(phase) {
            writeln!(output)?;
            writeln!(output, "{}", format!("Part {}", phase).cyan().bold())?;
            last_phase = Some(phase);
        }

        let Some(question) = session.current_question() else {
            break;
        };
        writeln!(output)?;
        writeln!(output, "Question {} of {}", question_index + 1, total)?;
        writeln!(output, "  [{}] {}", SLIDER_MIN, question.left_phrase)?;
        writeln!(output, "  [{}] {}", SLIDER_MAX, question.right_phrase)?;

        let value = loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("Failed to read answer")?;
            let answer = line.trim();

            if read == 0 || answer.eq_ignore_ascii_case("q") {
                writeln!(output, "Assessment abandoned.")?;
                return Ok(QuizOutcome::Abandoned);
            }

            match answer.parse::<u8>() {
                Ok(v) if v <= SLIDER_MAX => break v,
                _ => writeln!(
                    output,
                    "Please enter a whole number from {} to {}.",
                    SLIDER_MIN, SLIDER_MAX
                )?,
            }
        };

        session.submit(value)?;
    }

    Ok(QuizOutcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhraseConfig;
    use crate::generator::QuestionGenerator;
    use std::io::Cursor;

    #[test]
    fn test_quiz_completes_and_scores() {
        let config = PhraseConfig::builtin().unwrap();
        let questions = QuestionGenerator::seeded("quiz").generate(&config, Some(4)).unwrap();
        let mut session = AssessmentSession::new(&config, questions).unwrap();

        let mut input = Cursor::new("5\n5\n5\n5\n");
        let mut output = Vec::new();
        let outcome = run_quiz(&mut session, &mut input, &mut output).unwrap();

        assert_eq!(outcome, QuizOutcome::Completed);
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.score().unwrap().coordinates.x, 0.0);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Question 4 of 4"));
        assert!(text.contains("Part 2"));
    }

    #[test]
    fn test_bad_input_is_reprompted() {
        let config = PhraseConfig::builtin().unwrap();
        let questions = QuestionGenerator::seeded("retry").generate(&config, Some(2)).unwrap();
        let mut session = AssessmentSession::new(&config, questions).unwrap();

        let mut input = Cursor::new("eleven\n12\n3\n7\n");
        let mut output = Vec::new();
        let outcome = run_quiz(&mut session, &mut input, &mut output).unwrap();

        assert_eq!(outcome, QuizOutcome::Completed);
        let values: Vec<i64> = session.responses().iter().map(|r| r.value).collect();
        assert_eq!(values, vec![3, 7]);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Please enter a whole number").count(), 2);
    }

    #[test]
    fn test_quit_abandons() {
        let config = PhraseConfig::builtin().unwrap();
        let questions = QuestionGenerator::seeded("quit").generate(&config, Some(4)).unwrap();
        let mut session = AssessmentSession::new(&config, questions).unwrap();

        let mut input = Cursor::new("2\nq\n");
        let mut output = Vec::new();
        let outcome = run_quiz(&mut session, &mut input, &mut output).unwrap();

        assert_eq!(outcome, QuizOutcome::Abandoned);
        assert!(session.score().is_none());
        assert_eq!(session.responses().len(), 1);
    }
}
