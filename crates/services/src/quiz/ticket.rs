use std::time::Duration;

/// Monotonic generation counter for session state.
///
/// Bumped by every transition that replaces the active question or ends the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionVersion(u64);

impl SessionVersion {
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A deferred advance handed out by `QuizMachine::answer`.
///
/// Only honoured while the machine is still at the version it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    pub version: SessionVersion,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    NextQuestion,
    Ended,
    /// The ticket belonged to a question or session that no longer exists.
    Superseded,
}
