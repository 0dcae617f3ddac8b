//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{CatalogError, QuestionShapeError, SummaryError};

use crate::quiz::{QuizAction, QuizPhase};

/// Errors emitted by the question generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("not enough distractors for {name:?}: need {needed}, pool offers {available}")]
    InsufficientDistractors {
        name: String,
        needed: usize,
        available: usize,
    },
    #[error(transparent)]
    Shape(#[from] QuestionShapeError),
}

/// Errors emitted by the quiz state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot {action} while the quiz is {phase}")]
    InvalidTransition { action: QuizAction, phase: QuizPhase },
    #[error("the current question was already answered")]
    AlreadyAnswered,
    #[error("the current question has not been answered yet")]
    Unanswered,
    #[error("option {index} is out of range (question has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

impl QuizError {
    /// True for every error that means "this action is not allowed right now".
    #[must_use]
    pub fn is_invalid_transition(&self) -> bool {
        matches!(
            self,
            Self::InvalidTransition { .. } | Self::AlreadyAnswered | Self::Unanswered
        )
    }
}

/// Errors reported by an `AudioPlayer`. These never end a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlaybackError {
    #[error("audio output is unavailable")]
    Unavailable,
    #[error("playback rejected: {0}")]
    Rejected(String),
}
