//! Audio triggering for the active question.
//!
//! Playback is cosmetic: failures are logged and never reach the quiz state.

use std::sync::Arc;

use quiz_core::model::CatalogItem;

use crate::error::PlaybackError;

/// External audio output.
pub trait AudioPlayer: Send + Sync {
    /// Start playing the clip behind `audio_ref`.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError` if the clip cannot be played.
    fn play(&self, audio_ref: &str) -> Result<(), PlaybackError>;
}

/// Player for hosts without audio output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl AudioPlayer for SilentPlayer {
    fn play(&self, _audio_ref: &str) -> Result<(), PlaybackError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Played,
    Muted,
    Failed,
}

/// Decides when to play and holds the mute flag.
#[derive(Clone)]
pub struct PlaybackTrigger {
    player: Arc<dyn AudioPlayer>,
    muted: bool,
}

impl PlaybackTrigger {
    #[must_use]
    pub fn new(player: Arc<dyn AudioPlayer>) -> Self {
        Self {
            player,
            muted: false,
        }
    }

    #[must_use]
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Autoplay for a newly shown question.
    pub fn on_question_changed(&self, item: &CatalogItem) -> PlaybackStatus {
        self.play(item)
    }

    /// The user pressed the displayed symbol.
    pub fn on_symbol_pressed(&self, item: &CatalogItem) -> PlaybackStatus {
        self.play(item)
    }

    /// Flip the mute flag. Unmuting replays `current`, as a question change would.
    pub fn toggle_muted(&mut self, current: Option<&CatalogItem>) -> bool {
        self.muted = !self.muted;
        if !self.muted {
            if let Some(item) = current {
                self.play(item);
            }
        }
        self.muted
    }

    fn play(&self, item: &CatalogItem) -> PlaybackStatus {
        if self.muted {
            return PlaybackStatus::Muted;
        }
        match self.player.play(item.audio_ref()) {
            Ok(()) => PlaybackStatus::Played,
            Err(err) => {
                log::warn!(
                    "audio playback failed for {} ({}): {err}",
                    item.name(),
                    item.audio_ref()
                );
                PlaybackStatus::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Records every requested clip; optionally fails each call.
    #[derive(Default)]
    struct RecordingPlayer {
        played: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingPlayer {
        fn failing() -> Self {
            Self {
                played: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn played(&self) -> Vec<String> {
            self.played.lock().unwrap().clone()
        }
    }

    impl AudioPlayer for RecordingPlayer {
        fn play(&self, audio_ref: &str) -> Result<(), PlaybackError> {
            self.played.lock().unwrap().push(audio_ref.to_string());
            if self.fail {
                Err(PlaybackError::Rejected("autoplay blocked".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn item() -> CatalogItem {
        CatalogItem::new("ب", "Ба", "", "/audio/ba.mp3", Vec::new())
    }

    #[test]
    fn plays_when_unmuted() {
        let player = Arc::new(RecordingPlayer::default());
        let trigger = PlaybackTrigger::new(player.clone());

        assert_eq!(trigger.on_question_changed(&item()), PlaybackStatus::Played);
        assert_eq!(trigger.on_symbol_pressed(&item()), PlaybackStatus::Played);
        assert_eq!(player.played(), vec!["/audio/ba.mp3", "/audio/ba.mp3"]);
    }

    #[test]
    fn muted_never_calls_player() {
        let player = Arc::new(RecordingPlayer::default());
        let trigger = PlaybackTrigger::new(player.clone()).with_muted(true);

        assert_eq!(trigger.on_question_changed(&item()), PlaybackStatus::Muted);
        assert_eq!(trigger.on_symbol_pressed(&item()), PlaybackStatus::Muted);
        assert!(player.played().is_empty());
    }

    #[test]
    fn failure_is_swallowed() {
        let player = Arc::new(RecordingPlayer::failing());
        let trigger = PlaybackTrigger::new(player.clone());

        assert_eq!(trigger.on_question_changed(&item()), PlaybackStatus::Failed);
        assert_eq!(player.played().len(), 1);
    }

    #[test]
    fn unmute_replays_current_clip() {
        let player = Arc::new(RecordingPlayer::default());
        let mut trigger = PlaybackTrigger::new(player.clone());

        assert!(trigger.toggle_muted(Some(&item())));
        assert!(player.played().is_empty());
        assert!(!trigger.toggle_muted(Some(&item())));
        assert_eq!(player.played(), vec!["/audio/ba.mp3"]);
        assert!(trigger.toggle_muted(None));
    }
}
