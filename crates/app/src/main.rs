use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::content::arabic_alphabet;
use services::{PlaybackTrigger, QuizConfig, QuizLoopService, QuizMachine};
use ui::{App, UiApp, UiEventReceiver, build_app_context, ui_events};

/// Arabic letter recognition quiz.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Pause after an answer before the next question, in milliseconds.
    #[arg(long, env = "QUIZ_ADVANCE_DELAY_MS", default_value_t = 500)]
    advance_delay_ms: u64,

    /// Start with audio muted.
    #[arg(long, env = "QUIZ_MUTED")]
    muted: bool,

    /// Seed for a reproducible question order.
    #[arg(long, env = "QUIZ_SEED")]
    seed: Option<u64>,
}

impl Args {
    fn quiz_config(&self) -> QuizConfig {
        QuizConfig::default()
            .with_advance_delay(Duration::from_millis(self.advance_delay_ms))
            .with_start_muted(self.muted)
    }
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
    events: Mutex<Option<UiEventReceiver>>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn take_ui_events(&self) -> Option<UiEventReceiver> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.quiz_config();

    // The catalog is validated once here; a bad table is a startup error.
    let catalog = arabic_alphabet()?;
    log::info!(
        "loaded {} catalog items, advance delay {:?}",
        catalog.len(),
        config.advance_delay()
    );

    let machine = match args.seed {
        Some(seed) => {
            log::info!("using fixed shuffle seed {seed}");
            QuizMachine::seeded(catalog, config, seed)
        }
        None => QuizMachine::new(catalog, config),
    };

    let (sender, events) = ui_events();
    let playback = PlaybackTrigger::new(sender.audio_player()).with_muted(config.start_muted());
    let quiz_loop = Arc::new(
        QuizLoopService::new(machine, playback).with_on_change(move || sender.notify_changed()),
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_loop,
        events: Mutex::new(Some(events)),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Изучаем арабские буквы")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_quiz_config() {
        let args = Args::try_parse_from(["app"]).unwrap();
        assert_eq!(args.quiz_config(), QuizConfig::default());
        assert!(args.seed.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let args =
            Args::try_parse_from(["app", "--advance-delay-ms", "1200", "--muted", "--seed", "9"])
                .unwrap();
        let config = args.quiz_config();
        assert_eq!(config.advance_delay(), Duration::from_millis(1200));
        assert!(config.start_muted());
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn rejects_non_numeric_delay() {
        assert!(Args::try_parse_from(["app", "--advance-delay-ms", "soon"]).is_err());
    }
}
