use std::fmt;

/// Lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    Ended,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizPhase::NotStarted => "not started",
            QuizPhase::InProgress => "in progress",
            QuizPhase::Ended => "ended",
        };
        f.write_str(label)
    }
}

/// Transitions a caller can request; used to describe rejected transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizAction {
    Start,
    Answer,
    Advance,
    EndNow,
    Restart,
    Summarize,
}

impl fmt::Display for QuizAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizAction::Start => "start",
            QuizAction::Answer => "answer",
            QuizAction::Advance => "advance",
            QuizAction::EndNow => "end",
            QuizAction::Restart => "restart",
            QuizAction::Summarize => "summarize",
        };
        f.write_str(label)
    }
}
