//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Seeded RNG only
//! - No rendering or platform dependencies; side effects leave as `GameEvent`s

pub mod collision;
pub mod physics;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{Rect, obstacle_hitbox, runner_hitbox, runner_hits};
pub use state::{
    CACTUS_VARIANTS, Cloud, GameEvent, GameState, Moon, Obstacle, ObstacleKind, Runner,
    RunnerPose, SessionPhase, Star,
};
pub use tick::{TickInput, tick};
