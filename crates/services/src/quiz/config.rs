use std::time::Duration;

/// Pause between recording an answer and moving to the next question.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(500);

/// Tunables for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    advance_delay: Duration,
    start_muted: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            advance_delay: DEFAULT_ADVANCE_DELAY,
            start_muted: false,
        }
    }
}

impl QuizConfig {
    /// Delay before the automatic advance; zero advances on the next scheduler turn.
    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    #[must_use]
    pub fn with_start_muted(mut self, muted: bool) -> Self {
        self.start_muted = muted;
        self
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    #[must_use]
    pub fn start_muted(&self) -> bool {
        self.start_muted
    }
}
