use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::auto_advance::AutoAdvance;
use crate::error::QuizError;
use crate::playback::{PlaybackStatus, PlaybackTrigger};
use crate::quiz::{AdvanceOutcome, AdvanceTicket, AnswerOutcome, QuizMachine, QuizSnapshot};

type ChangeListener = Arc<dyn Fn() + Send + Sync>;

struct LoopState {
    machine: QuizMachine,
    playback: PlaybackTrigger,
    auto_advance: AutoAdvance,
}

impl LoopState {
    fn play_current(&self) -> Option<PlaybackStatus> {
        self.machine
            .current_item()
            .map(|item| self.playback.on_question_changed(item))
    }

    fn apply_advance(&mut self, outcome: AdvanceOutcome) {
        if outcome == AdvanceOutcome::NextQuestion {
            self.play_current();
        }
    }
}

/// Drives a quiz session for a front end.
///
/// Wraps the state machine with audio triggering and the delayed auto-advance. Every
/// state change, including one made by a timer, is followed by the change listener.
#[derive(Clone)]
pub struct QuizLoopService {
    state: Arc<Mutex<LoopState>>,
    on_change: Option<ChangeListener>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(machine: QuizMachine, playback: PlaybackTrigger) -> Self {
        Self {
            state: Arc::new(Mutex::new(LoopState {
                machine,
                playback,
                auto_advance: AutoAdvance::new(),
            })),
            on_change: None,
        }
    }

    /// Called after every state change, outside the internal lock.
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        let state = self.lock();
        QuizSnapshot::capture(&state.machine, state.playback.is_muted())
    }

    #[must_use]
    pub fn is_advance_pending(&self) -> bool {
        self.lock().auto_advance.is_pending()
    }

    /// Start the first session and play its first clip.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the machine rejects the start.
    pub fn start(&self) -> Result<(), QuizError> {
        self.mutate("start", |state| {
            state.machine.start()?;
            state.play_current();
            Ok(())
        })
    }

    /// Answer the active question and schedule the move to the next one.
    ///
    /// Without an async runtime to run the delay, the move happens right away.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the answer is rejected; nothing is scheduled then.
    pub fn answer(&self, selected: usize) -> Result<AnswerOutcome, QuizError> {
        let weak = Arc::downgrade(&self.state);
        let on_change = self.on_change.clone();
        self.mutate("answer", move |state| {
            let outcome = state.machine.answer(selected)?;
            let ticket = outcome.ticket;
            let scheduled = state
                .auto_advance
                .schedule(ticket.delay, move || fire(&weak, ticket, on_change.as_ref()));
            if !scheduled {
                let advanced = state.machine.fire_advance(ticket)?;
                state.apply_advance(advanced);
            }
            Ok(outcome)
        })
    }

    /// Advance immediately, dropping any pending auto-advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the machine rejects the advance.
    pub fn advance(&self) -> Result<AdvanceOutcome, QuizError> {
        self.mutate("advance", |state| {
            let outcome = state.machine.advance()?;
            state.auto_advance.cancel();
            state.apply_advance(outcome);
            Ok(outcome)
        })
    }

    /// End the session early.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` unless a session is running.
    pub fn end_now(&self) -> Result<(), QuizError> {
        self.mutate("end", |state| {
            state.machine.end_now()?;
            state.auto_advance.cancel();
            Ok(())
        })
    }

    /// Start over with a fresh order.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` before the first start.
    pub fn restart(&self) -> Result<(), QuizError> {
        self.mutate("restart", |state| {
            state.machine.restart()?;
            state.auto_advance.cancel();
            state.play_current();
            Ok(())
        })
    }

    /// Play the active clip again, as when the symbol is pressed.
    pub fn replay_audio(&self) -> Option<PlaybackStatus> {
        let state = self.lock();
        state
            .machine
            .current_item()
            .map(|item| state.playback.on_symbol_pressed(item))
    }

    /// Flip the mute flag and return the new value.
    pub fn toggle_mute(&self) -> bool {
        let muted = {
            let mut state = self.lock();
            let LoopState {
                machine, playback, ..
            } = &mut *state;
            playback.toggle_muted(machine.current_item())
        };
        notify(self.on_change.as_ref());
        muted
    }

    fn mutate<T>(
        &self,
        label: &str,
        f: impl FnOnce(&mut LoopState) -> Result<T, QuizError>,
    ) -> Result<T, QuizError> {
        let result = {
            let mut state = self.lock();
            f(&mut state)
        };
        match &result {
            Ok(_) => notify(self.on_change.as_ref()),
            Err(err) if err.is_invalid_transition() => log::debug!("{label} ignored: {err}"),
            Err(err) => log::warn!("{label} failed: {err}"),
        }
        result
    }

    fn lock(&self) -> MutexGuard<'_, LoopState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<LoopState>) -> MutexGuard<'_, LoopState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn notify(on_change: Option<&ChangeListener>) {
    if let Some(on_change) = on_change {
        on_change();
    }
}

fn fire(state: &Weak<Mutex<LoopState>>, ticket: AdvanceTicket, on_change: Option<&ChangeListener>) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let changed = {
        let mut state = lock_state(&state);
        match state.machine.fire_advance(ticket) {
            Ok(AdvanceOutcome::Superseded) => {
                log::debug!("auto-advance superseded (ticket v{})", ticket.version.value());
                false
            }
            Ok(outcome) => {
                state.apply_advance(outcome);
                true
            }
            Err(err) => {
                log::debug!("auto-advance ignored: {err}");
                false
            }
        }
    };
    if changed {
        notify(on_change);
    }
}
