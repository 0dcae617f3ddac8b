use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::content::arabic_alphabet;
use quiz_core::time::fixed_clock;
use services::{PlaybackTrigger, QuizConfig, QuizLoopService, QuizMachine};

use crate::app::App;
use crate::context::{UiApp, build_app_context};
use crate::events::{UiEventReceiver, ui_events};

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
    events: Mutex<Option<UiEventReceiver>>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn take_ui_events(&self) -> Option<UiEventReceiver> {
        self.events.lock().unwrap().take()
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { App {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_loop: Arc<QuizLoopService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Whether the dom gets new work within `window`. Pair with paused time.
    pub async fn wakes_within(&mut self, window: std::time::Duration) -> bool {
        tokio::time::timeout(window, self.dom.wait_for_work())
            .await
            .is_ok()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Muted, seeded quiz on a fixed clock. `prepare` runs before the first render.
pub fn setup_view_harness(prepare: impl FnOnce(&QuizLoopService)) -> ViewHarness {
    let (sender, events) = ui_events();
    let machine = QuizMachine::seeded(
        arabic_alphabet().expect("built-in catalog"),
        QuizConfig::default(),
        21,
    )
    .with_clock(fixed_clock());
    let playback = PlaybackTrigger::new(sender.audio_player()).with_muted(true);
    let quiz_loop = Arc::new(
        QuizLoopService::new(machine, playback).with_on_change(move || sender.notify_changed()),
    );
    prepare(&quiz_loop);

    let app = Arc::new(TestApp {
        quiz_loop: Arc::clone(&quiz_loop),
        events: Mutex::new(Some(events)),
    });
    let dom = VirtualDom::new_with_props(AppHarness, HarnessProps { app });

    ViewHarness { dom, quiz_loop }
}
