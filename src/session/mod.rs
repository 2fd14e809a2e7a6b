// Assessment session state machine
//
// NotStarted -> InProgress(0..n-1) -> Completed
//
// Each submitted response advances the index; the last one scores the
// assessment exactly once. A completed session never goes back; retaking
// means generating a new question set.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PhraseConfig;
use crate::errors::{AssessmentError, Result};
use crate::generator::GeneratedQuestion;
use crate::scoring::{score_assessment, AssessmentScore, Response, SliderValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    NotStarted,
    InProgress { question_index: usize },
    Completed,
}

pub struct AssessmentSession<'a> {
    id: Uuid,
    config: &'a PhraseConfig,
    questions: Vec<GeneratedQuestion>,
    responses: Vec<Response>,
    state: SessionState,
    score: Option<AssessmentScore>,
}

impl<'a> AssessmentSession<'a> {
    pub fn new(config: &'a PhraseConfig, questions: Vec<GeneratedQuestion>) -> Result<Self> {
        if questions.is_empty() {
            return Err(AssessmentError::insufficient_phrases(
                0,
                config.flatten_phrases().len(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            config,
            questions,
            responses: Vec::new(),
            state: SessionState::NotStarted,
            score: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn questions(&self) -> &[GeneratedQuestion] {
        &self.questions
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Score produced when the last response was submitted
    pub fn score(&self) -> Option<&AssessmentScore> {
        self.score.as_ref()
    }

    pub fn start(&mut self) -> Result<&GeneratedQuestion> {
        match self.state {
            SessionState::NotStarted => {
                self.state = SessionState::InProgress { question_index: 0 };
                tracing::debug!("Session {} started with {} questions", self.id, self.questions.len());
                Ok(&self.questions[0])
            }
            SessionState::InProgress { question_index } => Ok(&self.questions[question_index]),
            SessionState::Completed => Err(AssessmentError::SessionCompleted),
        }
    }

    /// The question awaiting a response, if the session is in progress
    pub fn current_question(&self) -> Option<&GeneratedQuestion> {
        match self.state {
            SessionState::InProgress { question_index } => self.questions.get(question_index),
            _ => None,
        }
    }

    /// Record a slider value for the current question. Returns the new state;
    /// `Completed` means the score is available.
    pub fn submit(&mut self, value: u8) -> Result<SessionState> {
        let index = match self.state {
            SessionState::NotStarted => return Err(AssessmentError::SessionNotStarted),
            SessionState::Completed => return Err(AssessmentError::SessionCompleted),
            SessionState::InProgress { question_index } => question_index,
        };

        let value = SliderValue::new(value as i64)?;
        let question = &self.questions[index];
        self.responses.push(Response::new(question.id.clone(), value.get()));

        if index + 1 < self.questions.len() {
            self.state = SessionState::InProgress {
                question_index: index + 1,
            };
            return Ok(self.state);
        }

        // Scoring failure leaves the session in progress on the last question
        // with the response withdrawn; the caller restarts from scratch.
        match score_assessment(&self.questions, &self.responses, self.config) {
            Ok(score) => {
                self.score = Some(score);
                self.state = SessionState::Completed;
                tracing::info!("Session {} completed", self.id);
                Ok(self.state)
            }
            Err(e) => {
                self.responses.pop();
                Err(e)
            }
        }
    }

    /// Questions in phase one; the remainder form phase two
    pub fn questions_per_phase(&self) -> usize {
        self.questions.len().div_ceil(2)
    }

    /// Phase of the question at `index`: its own phase tag when generated
    /// per dimension, otherwise first or second half.
    pub fn phase_of(&self, index: usize) -> usize {
        match self.questions.get(index).and_then(|q| q.phase) {
            Some(phase) => phase,
            None if index < self.questions_per_phase() => 1,
            None => 2,
        }
    }

    pub fn current_phase(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { question_index } => Some(self.phase_of(question_index)),
            _ => None,
        }
    }

    /// Percentage of questions answered
    pub fn progress(&self) -> f64 {
        self.responses.len() as f64 / self.questions.len() as f64 * 100.0
    }
}
