//! Inbound session configuration
//!
//! Supplied by the host page as JSON in the canvas's `data-game-config`
//! attribute. Everything here is display-only: the booster multiplier is
//! drawn next to the score but never applied to the reported result - the
//! host does that after the `runner:gameover` event.

use serde::{Deserialize, Serialize};

/// Which tournament the session belongs to, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentKind {
    Mini,
    Grand,
}

impl TournamentKind {
    pub fn label(self) -> &'static str {
        match self {
            TournamentKind::Mini => "Mini Tournament",
            TournamentKind::Grand => "Grand Tournament",
        }
    }
}

/// Display-only session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Active booster multiplier, >= 1; 1 means no booster
    #[serde(default = "default_multiplier")]
    pub booster_multiplier: f32,
    /// Tournament banner to draw, if any
    #[serde(default)]
    pub tournament: Option<TournamentKind>,
}

fn default_multiplier() -> f32 {
    1.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            booster_multiplier: default_multiplier(),
            tournament: None,
        }
    }
}

impl GameConfig {
    /// Whether the score readout shows the booster suffix
    pub fn booster_active(&self) -> bool {
        self.booster_multiplier > 1.0
    }

    /// Parse the host-supplied attribute; malformed input falls back to
    /// defaults rather than blocking the game
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("bad game config ({err}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config =
            GameConfig::from_json(r#"{"booster_multiplier": 2, "tournament": "grand"}"#);
        assert_eq!(config.booster_multiplier, 2.0);
        assert_eq!(config.tournament, Some(TournamentKind::Grand));
        assert!(config.booster_active());
    }

    #[test]
    fn test_missing_fields_default() {
        let config = GameConfig::from_json("{}");
        assert_eq!(config.booster_multiplier, 1.0);
        assert!(config.tournament.is_none());
        assert!(!config.booster_active());
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        let config = GameConfig::from_json("not json");
        assert_eq!(config.booster_multiplier, 1.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TournamentKind::Mini.label(), "Mini Tournament");
        assert_eq!(TournamentKind::Grand.label(), "Grand Tournament");
    }
}
