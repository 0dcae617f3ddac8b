use std::sync::{Arc, Mutex, PoisonError};

use services::QuizLoopService;

use crate::events::UiEventReceiver;

pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> Arc<QuizLoopService>;

    /// Receiver for change and audio events. Handed out once.
    fn take_ui_events(&self) -> Option<UiEventReceiver>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loop: Arc<QuizLoopService>,
    events_once: Arc<Mutex<Option<UiEventReceiver>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loop: app.quiz_loop(),
            events_once: Arc::new(Mutex::new(app.take_ui_events())),
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    /// The event receiver, for the first caller only.
    #[must_use]
    pub fn take_events(&self) -> Option<UiEventReceiver> {
        self.events_once
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
