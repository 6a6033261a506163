//! Sound cues
//!
//! Strictly best-effort: autoplay restrictions, missing files, and decode
//! errors are all swallowed. A fresh element is created per play so rapid
//! cues never interrupt each other.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::HtmlAudioElement;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Runner left the ground
    Jump,
    /// Score milestone reached
    Score,
    /// Collision ended the session
    Hit,
}

impl SoundCue {
    fn source_path(self) -> &'static str {
        match self {
            SoundCue::Jump => "/sounds/jump.mp3",
            SoundCue::Score => "/sounds/score.mp3",
            SoundCue::Hit => "/sounds/hit.mp3",
        }
    }
}

/// Cue player with a mute toggle
pub struct AudioBank {
    muted: bool,
    volume: f64,
}

impl Default for AudioBank {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBank {
    pub fn new() -> Self {
        Self {
            muted: false,
            volume: 0.5,
        }
    }

    pub fn toggle_muted(&mut self) {
        self.muted = !self.muted;
        log::info!("sound {}", if self.muted { "muted" } else { "on" });
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Play a cue; every failure path is silent
    pub fn play(&self, cue: SoundCue) {
        if self.muted {
            return;
        }
        let Ok(audio) = HtmlAudioElement::new_with_src(cue.source_path()) else {
            return;
        };
        audio.set_volume(self.volume);

        if let Ok(promise) = audio.play() {
            // Swallow the rejection the browser hands back when autoplay
            // is blocked; an unhandled one would spam the console
            let noop = Closure::wrap(Box::new(|_: JsValue| {}) as Box<dyn FnMut(JsValue)>);
            let _ = promise.catch(&noop);
            noop.forget();
        }
    }
}
