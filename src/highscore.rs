//! Device-local best score
//!
//! Persisted to LocalStorage, independent of any server-side leaderboard.
//! The host application never reads this; it exists purely for the `HI`
//! readout on the canvas.

use serde::{Deserialize, Serialize};

/// Best score seen on this device
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct BestScore {
    pub score: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "tourney_runner_best";

    pub fn new() -> Self {
        Self::default()
    }

    /// A session score beats the record only if positive and strictly higher
    pub fn qualifies(&self, score: u32) -> bool {
        score > 0 && score > self.score
    }

    /// Record a session result; returns true (and updates) if it qualified
    pub fn record(&mut self, score: u32, timestamp: f64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.score = score;
        self.timestamp = timestamp;
        true
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(best) = serde_json::from_str::<BestScore>(&json) {
                    log::info!("Loaded best score: {}", best.score);
                    return best;
                }
            }
        }

        log::info!("No local best score, starting fresh");
        Self::new()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Best score saved ({})", self.score);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
