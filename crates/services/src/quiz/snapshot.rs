use rand::Rng;

use quiz_core::model::{Question, QuizSummary, Score, WrongAnswer};

use super::machine::QuizMachine;
use super::phase::QuizPhase;
use super::ticket::SessionVersion;

/// Read-only copy of everything a screen needs to render the quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSnapshot {
    pub phase: QuizPhase,
    pub version: SessionVersion,
    pub position: usize,
    pub total_questions: usize,
    pub question: Option<Question>,
    pub selected_index: Option<usize>,
    pub score: Score,
    pub wrong_answers: Vec<WrongAnswer>,
    pub elapsed_session_secs: u64,
    pub elapsed_question_secs: u64,
    pub progress_percent: f64,
    pub muted: bool,
    /// Present once the session has ended.
    pub summary: Option<QuizSummary>,
}

impl QuizSnapshot {
    #[must_use]
    pub fn capture<R: Rng>(machine: &QuizMachine<R>, muted: bool) -> Self {
        let summary = if machine.phase() == QuizPhase::Ended {
            match machine.summary() {
                Ok(summary) => Some(summary),
                Err(err) => {
                    log::error!("failed to summarize ended session: {err}");
                    None
                }
            }
        } else {
            None
        };

        Self {
            phase: machine.phase(),
            version: machine.version(),
            position: machine.position(),
            total_questions: machine.total_questions(),
            question: machine.current_question().cloned(),
            selected_index: machine.selected_index(),
            score: machine.score(),
            wrong_answers: machine.wrong_answers().to_vec(),
            elapsed_session_secs: machine.elapsed_session_secs(),
            elapsed_question_secs: machine.elapsed_question_secs(),
            progress_percent: machine.progress_percent(),
            muted,
            summary,
        }
    }

    #[must_use]
    pub fn has_answered(&self) -> bool {
        self.selected_index.is_some()
    }
}
