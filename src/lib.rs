//! Tourney Runner - a side-scrolling obstacle runner for tournament play
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, world generation, collision, scoring)
//! - `renderer`: Canvas2D rendering pipeline (wasm only)
//! - `assets`: Sprite catalog and loader with placeholder fallback
//! - `audio`: Best-effort sound cues (wasm only)
//! - `highscore`: Device-local best score
//! - `config`: Display-only session configuration from the host page
//!
//! The host application listens for the `runner:gameover` DOM event on the
//! game canvas and owns everything past that point (booster multiplication,
//! server persistence, leaderboards).

pub mod assets;
pub mod config;
pub mod highscore;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use config::{GameConfig, TournamentKind};
pub use highscore::BestScore;

/// Game configuration constants
///
/// Units are per display frame (one simulation tick per animation frame).
/// The physics values are tunables: any pair giving a quick ascent and an
/// accelerating fall behaves the same.
pub mod consts {
    /// Downward acceleration applied each airborne tick (px/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Jump impulse magnitude; vertical velocity is set to `-JUMP_FORCE`
    /// (negative is up in canvas coordinates)
    pub const JUMP_FORCE: f32 = 12.0;
    /// Height of the ground strip at the bottom of the viewport
    pub const GROUND_HEIGHT: f32 = 20.0;

    /// World scroll speed at session start (px/tick)
    pub const BASE_SPEED: f32 = 6.0;
    /// Per-tick scroll speed increase, unbounded
    pub const SPEED_INCREMENT: f32 = 0.001;
    /// Decorations drift at this fraction of the scroll speed
    pub const CLOUD_DRIFT_FACTOR: f32 = 0.5;
    /// Fallback tile width for the ground texture when its image is missing
    pub const TRACK_TILE_WIDTH: f32 = 100.0;

    /// Obstacle spawn gap is resampled as `MIN + random() * MAX` frames
    pub const SPAWN_GAP_MIN: f32 = 50.0;
    pub const SPAWN_GAP_MAX: f32 = 150.0;
    /// Fraction of spawns that are ground obstacles (the rest are birds)
    pub const CACTUS_RATIO: f32 = 0.8;
    /// Per-tick probability of spawning a cloud at the right edge
    pub const CLOUD_CHANCE: f32 = 0.01;
    /// Day/night flip is considered every this many frames...
    pub const NIGHT_CHECK_INTERVAL: u64 = 1000;
    /// ...and taken with this probability
    pub const NIGHT_FLIP_CHANCE: f32 = 0.1;
    /// Per-tick probability that a star toggles visibility
    pub const STAR_BLINK_CHANCE: f32 = 0.01;

    /// Score increments by 1 every this many frames
    pub const SCORE_INTERVAL: u64 = 6;
    /// Milestone fires when the score crosses a multiple of this
    pub const MILESTONE_STEP: u32 = 100;
    /// Frames the score text flashes after a milestone
    pub const MILESTONE_FLASH_TICKS: u32 = 20;

    /// Runner defaults - fixed x, normal and ducking silhouettes
    pub const RUNNER_X: f32 = 50.0;
    pub const RUNNER_WIDTH: f32 = 44.0;
    pub const RUNNER_HEIGHT: f32 = 47.0;
    pub const RUNNER_DUCK_HEIGHT: f32 = 30.0;
    /// Runner animation frame toggles every this many ticks
    pub const RUN_ANIM_PERIOD: u8 = 6;

    /// Flying obstacle dimensions and animation cadence
    pub const BIRD_WIDTH: f32 = 46.0;
    pub const BIRD_HEIGHT: f32 = 40.0;
    pub const BIRD_ANIM_PERIOD: u8 = 15;
    /// Birds spawn `50 + random() * 50` px above the ground line
    pub const BIRD_BAND_BASE: f32 = 50.0;
    pub const BIRD_BAND_SPREAD: f32 = 50.0;

    /// Decoration dimensions
    pub const CLOUD_WIDTH: f32 = 46.0;
    pub const CLOUD_HEIGHT: f32 = 14.0;
    pub const STAR_SIZE: f32 = 3.0;
    pub const MOON_RADIUS: f32 = 20.0;

    /// Hitboxes shrink by this inset on every side to keep near-misses fair
    pub const HITBOX_INSET: f32 = 4.0;
}
