//! Bridge from the quiz services into the webview.
//!
//! State changes and audio requests may come from a timer task, so they travel over a
//! channel and are applied by the root component.

use std::sync::Arc;

use dioxus::document::eval;
use services::{AudioPlayer, PlaybackError};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// The quiz state changed; re-read the snapshot.
    Changed,
    /// Play the clip behind this audio reference.
    Play(String),
}

pub type UiEventReceiver = UnboundedReceiver<UiEvent>;

/// Sending half, shared with the services layer.
#[derive(Clone, Debug)]
pub struct UiEventSender {
    tx: UnboundedSender<UiEvent>,
}

impl UiEventSender {
    pub fn notify_changed(&self) {
        if self.tx.send(UiEvent::Changed).is_err() {
            log::debug!("ui event receiver dropped; change not delivered");
        }
    }

    #[must_use]
    pub fn audio_player(&self) -> Arc<dyn AudioPlayer> {
        Arc::new(ChannelAudioPlayer {
            tx: self.tx.clone(),
        })
    }
}

#[must_use]
pub fn ui_events() -> (UiEventSender, UiEventReceiver) {
    let (tx, rx) = unbounded_channel();
    (UiEventSender { tx }, rx)
}

/// `AudioPlayer` that hands clips to the webview.
#[derive(Debug)]
pub struct ChannelAudioPlayer {
    tx: UnboundedSender<UiEvent>,
}

impl AudioPlayer for ChannelAudioPlayer {
    fn play(&self, audio_ref: &str) -> Result<(), PlaybackError> {
        self.tx
            .send(UiEvent::Play(audio_ref.to_string()))
            .map_err(|_| PlaybackError::Unavailable)
    }
}

pub(crate) fn play_clip_script(audio_ref: &str) -> String {
    format!(
        r"try {{
            await new Audio({audio_ref:?}).play();
            return true;
        }} catch (err) {{
            console.warn(err);
            return false;
        }}"
    )
}

/// Play a clip in the webview, logging anything the browser refuses.
pub(crate) async fn play_clip(audio_ref: String) {
    match eval(&play_clip_script(&audio_ref)).join::<bool>().await {
        Ok(true) => {}
        Ok(false) => log::warn!("webview rejected audio playback for {audio_ref}"),
        Err(err) => log::warn!("audio playback failed for {audio_ref}: {err}"),
    }
}
