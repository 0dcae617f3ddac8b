use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quiz_core::Clock;
use quiz_core::model::{Catalog, CatalogItem, Question, QuizSummary, Score, WrongAnswer};

use super::config::QuizConfig;
use super::phase::{QuizAction, QuizPhase};
use super::ticket::{AdvanceOutcome, AdvanceTicket, SessionVersion};
use crate::error::QuizError;
use crate::question::generate_question;
use crate::shuffle::shuffled;

/// Result of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_index: usize,
    pub ticket: AdvanceTicket,
}

//
// ─── MACHINE ───────────────────────────────────────────────────────────────────
//

/// Owns one quiz session: the shuffled order, the active question, the score and timing.
///
/// Every mutation goes through a transition method. Transitions that are not allowed in
/// the current phase return an error and leave the state untouched.
pub struct QuizMachine<R = StdRng> {
    catalog: Catalog,
    name_pool: Vec<String>,
    config: QuizConfig,
    clock: Clock,
    rng: R,

    phase: QuizPhase,
    version: SessionVersion,
    order: Vec<CatalogItem>,
    position: usize,
    question: Option<Question>,
    selected: Option<usize>,
    score: Score,
    wrong_answers: Vec<WrongAnswer>,
    started_at: Option<DateTime<Utc>>,
    question_started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl QuizMachine<StdRng> {
    /// Create a machine seeded from the operating system.
    #[must_use]
    pub fn new(catalog: Catalog, config: QuizConfig) -> Self {
        QuizMachine::with_rng(catalog, config, StdRng::from_os_rng())
    }

    /// Create a machine whose shuffles are reproducible for a given seed.
    #[must_use]
    pub fn seeded(catalog: Catalog, config: QuizConfig, seed: u64) -> Self {
        QuizMachine::with_rng(catalog, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuizMachine<R> {
    #[must_use]
    pub fn with_rng(catalog: Catalog, config: QuizConfig, rng: R) -> Self {
        let name_pool = catalog.names();
        Self {
            catalog,
            name_pool,
            config,
            clock: Clock::default_clock(),
            rng,
            phase: QuizPhase::NotStarted,
            version: SessionVersion::default(),
            order: Vec::new(),
            position: 0,
            question: None,
            selected: None,
            score: Score::default(),
            wrong_answers: Vec::new(),
            started_at: None,
            question_started_at: None,
            ended_at: None,
        }
    }

    /// Replace the clock used for session and question timers.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Mutable access to the clock, for hosts and tests that drive time by hand.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    //
    // ─── READ ACCESS ───────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn version(&self) -> SessionVersion {
        self.version
    }

    /// The session order; empty before the first start.
    #[must_use]
    pub fn order(&self) -> &[CatalogItem] {
        &self.order
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// The item on screen. `None` outside `InProgress`, so an ended session has nothing to play.
    #[must_use]
    pub fn current_item(&self) -> Option<&CatalogItem> {
        if self.phase != QuizPhase::InProgress {
            return None;
        }
        self.question.as_ref().map(Question::item)
    }

    /// Option picked for the active question, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn has_answered(&self) -> bool {
        self.selected.is_some()
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
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Seconds since the session started; frozen once the session ends.
    #[must_use]
    pub fn elapsed_session_secs(&self) -> u64 {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => quiz_core::time::elapsed_seconds(start, end),
            (Some(start), None) => self.clock.seconds_since(start),
            _ => 0,
        }
    }

    /// Seconds the active question has been on screen; zero outside a running session.
    #[must_use]
    pub fn elapsed_question_secs(&self) -> u64 {
        match (self.phase, self.question_started_at) {
            (QuizPhase::InProgress, Some(start)) => self.clock.seconds_since(start),
            _ => 0,
        }
    }

    /// Progress through the order as a percentage, counting the active question.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        if self.order.is_empty() {
            return 0.0;
        }
        (self.position + 1) as f64 / self.order.len() as f64 * 100.0
    }

    /// Results for the current or finished session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` before the first start.
    /// Returns `QuizError::Summary` if the recorded state is inconsistent.
    pub fn summary(&self) -> Result<QuizSummary, QuizError> {
        let Some(started_at) = self.started_at else {
            return Err(self.reject(QuizAction::Summarize));
        };
        let ended_at = self.ended_at.unwrap_or_else(|| self.clock.now());
        let summary =
            QuizSummary::new(self.score, self.wrong_answers.clone(), started_at, ended_at)?;
        Ok(summary)
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// `NotStarted -> InProgress` with a freshly shuffled order.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless the quiz has not started yet.
    /// Returns `QuizError::Question` if the first question cannot be generated.
    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.phase != QuizPhase::NotStarted {
            return Err(self.reject(QuizAction::Start));
        }
        self.begin_session()
    }

    /// Record an answer for the active question.
    ///
    /// Allowed once per question. The returned ticket should be handed to
    /// `fire_advance` after `ticket.delay`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside `InProgress`.
    /// Returns `QuizError::AlreadyAnswered` on a second answer for the same question.
    /// Returns `QuizError::OptionOutOfRange` for an index past the options.
    pub fn answer(&mut self, selected: usize) -> Result<AnswerOutcome, QuizError> {
        if self.phase != QuizPhase::InProgress {
            return Err(self.reject(QuizAction::Answer));
        }
        if self.selected.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }
        let Some(question) = self.question.as_ref() else {
            return Err(self.reject(QuizAction::Answer));
        };
        let Some(user_answer) = question.option(selected) else {
            return Err(QuizError::OptionOutOfRange {
                index: selected,
                len: question.options().len(),
            });
        };

        let correct = question.is_correct(selected);
        if !correct {
            self.wrong_answers.push(WrongAnswer {
                symbol: question.item().symbol().to_string(),
                correct_answer: question.correct_answer().to_string(),
                user_answer: user_answer.to_string(),
            });
        }
        let correct_index = question.correct_index();
        self.score.record(correct);
        self.selected = Some(selected);

        Ok(AnswerOutcome {
            correct,
            correct_index,
            ticket: AdvanceTicket {
                version: self.version,
                delay: self.config.advance_delay(),
            },
        })
    }

    /// Move past the answered question, ending the session after the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside `InProgress`.
    /// Returns `QuizError::Unanswered` if the active question has no answer yet.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, QuizError> {
        if self.phase != QuizPhase::InProgress {
            return Err(self.reject(QuizAction::Advance));
        }
        if self.selected.is_none() {
            return Err(QuizError::Unanswered);
        }

        let next = self.position + 1;
        if next < self.order.len() {
            let question = generate_question(&self.order[next], &self.name_pool, &mut self.rng)?;
            self.position = next;
            self.question = Some(question);
            self.selected = None;
            self.question_started_at = Some(self.clock.now());
            self.version = self.version.next();
            Ok(AdvanceOutcome::NextQuestion)
        } else {
            self.finish();
            Ok(AdvanceOutcome::Ended)
        }
    }

    /// Apply a deferred advance, unless the session has moved on since it was issued.
    ///
    /// # Errors
    ///
    /// Same as `advance` when the ticket is current.
    pub fn fire_advance(&mut self, ticket: AdvanceTicket) -> Result<AdvanceOutcome, QuizError> {
        if ticket.version != self.version {
            return Ok(AdvanceOutcome::Superseded);
        }
        self.advance()
    }

    /// End the running session early, keeping the recorded score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside `InProgress`.
    pub fn end_now(&mut self) -> Result<(), QuizError> {
        if self.phase != QuizPhase::InProgress {
            return Err(self.reject(QuizAction::EndNow));
        }
        self.finish();
        Ok(())
    }

    /// Throw away the current session and start a new one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` before the first start.
    /// Returns `QuizError::Question` if the first question cannot be generated.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        if self.phase == QuizPhase::NotStarted {
            return Err(self.reject(QuizAction::Restart));
        }
        self.begin_session()
    }

    fn begin_session(&mut self) -> Result<(), QuizError> {
        let order = shuffled(self.catalog.items(), &mut self.rng);
        let Some(first) = order.first() else {
            return Err(self.reject(QuizAction::Start));
        };
        let question = generate_question(first, &self.name_pool, &mut self.rng)?;
        let now = self.clock.now();

        self.order = order;
        self.position = 0;
        self.question = Some(question);
        self.selected = None;
        self.score = Score::default();
        self.wrong_answers.clear();
        self.started_at = Some(now);
        self.question_started_at = Some(now);
        self.ended_at = None;
        self.phase = QuizPhase::InProgress;
        self.version = self.version.next();
        Ok(())
    }

    fn finish(&mut self) {
        self.phase = QuizPhase::Ended;
        self.ended_at = Some(self.clock.now());
        self.version = self.version.next();
    }

    fn reject(&self, action: QuizAction) -> QuizError {
        QuizError::InvalidTransition {
            action,
            phase: self.phase,
        }
    }
}
