use std::time::Duration;

use dioxus::prelude::*;
use services::QuizPhase;

use crate::context::AppContext;
use crate::events::{UiEvent, play_clip};
use crate::views::{InstructionsView, QuestionView, ResultsView, ViewError};
use crate::vm::{map_quiz_vm, map_results_vm};

const TICK: Duration = Duration::from_secs(1);

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let mut revision = use_signal(|| 0_u64);
    let tick = use_signal(|| 0_u64);

    let events_ctx = ctx.clone();
    use_future(move || {
        let ctx = events_ctx.clone();
        async move {
            let Some(mut events) = ctx.take_events() else {
                log::debug!("ui events already taken; not listening");
                return;
            };
            while let Some(event) = events.recv().await {
                match event {
                    UiEvent::Changed => revision += 1,
                    UiEvent::Play(audio_ref) => {
                        spawn(play_clip(audio_ref));
                    }
                }
            }
        }
    });

    let _ = (revision(), tick());
    let snapshot = ctx.quiz_loop().snapshot();

    let screen = match snapshot.phase {
        QuizPhase::NotStarted => rsx! { InstructionsView {} },
        QuizPhase::InProgress => match map_quiz_vm(&snapshot) {
            Some(vm) => rsx! {
                SessionTicker { tick }
                QuestionView { vm }
            },
            None => rsx! { p { "{ViewError::Unknown.message()}" } },
        },
        QuizPhase::Ended => match snapshot.summary.as_ref() {
            Some(summary) => rsx! { ResultsView { vm: map_results_vm(summary) } },
            None => rsx! { p { "{ViewError::Unknown.message()}" } },
        },
    };

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Изучаем арабские буквы" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Что-то пошло не так" }
                        pre { "{errors:?}" }
                    }
                },
                {screen}
            }
        }
    }
}

/// Bumps `tick` once a second while mounted. Display timers only; transitions never wait on it.
#[component]
fn SessionTicker(tick: Signal<u64>) -> Element {
    let mut tick = tick;
    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK).await;
            tick += 1;
        }
    });
    rsx! {}
}
