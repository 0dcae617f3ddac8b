use serde::{Deserialize, Serialize};

/// Running tallies for a quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub streak: u32,
    pub max_streak: u32,
}

impl Score {
    /// Record one answer.
    ///
    /// A correct answer extends the streak by one; an incorrect one resets it to zero.
    /// `max_streak` never decreases.
    pub fn record(&mut self, correct: bool) {
        self.total = self.total.saturating_add(1);
        if correct {
            self.correct = self.correct.saturating_add(1);
            self.streak = self.streak.saturating_add(1);
            self.max_streak = self.max_streak.max(self.streak);
        } else {
            self.incorrect = self.incorrect.saturating_add(1);
            self.streak = 0;
        }
    }

    /// Share of correct answers in percent, or 0 when nothing was answered.
    #[must_use]
    pub fn accuracy_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.total) * 100.0
    }
}

/// A wrong answer kept for the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongAnswer {
    pub symbol: String,
    pub correct_answer: String,
    pub user_answer: String,
}
