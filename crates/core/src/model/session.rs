use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::score::{Score, WrongAnswer};
use crate::time::elapsed_seconds;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("ended_at is before started_at")]
    InvalidTimeRange,

    #[error("score total ({total}) does not match correct + incorrect ({sum})")]
    CountMismatch { total: u32, sum: u32 },

    #[error("wrong answer log has {logged} entries but score counts {incorrect} incorrect")]
    WrongLogMismatch { logged: usize, incorrect: u32 },
}

/// Aggregate results for a finished (or abandoned) quiz session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    score: Score,
    wrong_answers: Vec<WrongAnswer>,
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Build a summary from the final session state.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `ended_at` is before `started_at`.
    /// Returns `SummaryError::CountMismatch` if the score tallies disagree.
    /// Returns `SummaryError::WrongLogMismatch` if the wrong-answer log disagrees with the score.
    pub fn new(
        score: Score,
        wrong_answers: Vec<WrongAnswer>,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if ended_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        let sum = score.correct.saturating_add(score.incorrect);
        if sum != score.total {
            return Err(SummaryError::CountMismatch {
                total: score.total,
                sum,
            });
        }
        if usize::try_from(score.incorrect).ok() != Some(wrong_answers.len()) {
            return Err(SummaryError::WrongLogMismatch {
                logged: wrong_answers.len(),
                incorrect: score.incorrect,
            });
        }

        Ok(Self {
            score,
            wrong_answers,
            started_at,
            ended_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn wrong_answers(&self) -> &[WrongAnswer] {
        &self.wrong_answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn ended_at(&self) -> DateTime<Utc> {
        self.ended_at
    }

    #[must_use]
    pub fn accuracy_percent(&self) -> f64 {
        self.score.accuracy_percent()
    }

    #[must_use]
    pub fn total_seconds(&self) -> u64 {
        elapsed_seconds(self.started_at, self.ended_at)
    }

    /// Mean session time per answered question, or 0 when nothing was answered.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_seconds_per_question(&self) -> f64 {
        if self.score.total == 0 {
            return 0.0;
        }
        self.total_seconds() as f64 / f64::from(self.score.total)
    }

    /// True when every answered question was answered correctly.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.wrong_answers.is_empty()
    }
}
