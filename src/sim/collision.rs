//! Axis-aligned hitbox collision
//!
//! Both entities use a hitbox inset by [`HITBOX_INSET`] on every side, so
//! sprites can visually overlap near their edges without ending the session.

use glam::Vec2;

use crate::consts::*;

use super::state::{Obstacle, Runner};

/// Axis-aligned rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Shrink by `amount` on every side; degenerates to zero size, never
    /// negative, so a tiny hitbox cannot "invert" into a giant one
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(amount),
            size: (self.size - Vec2::splat(2.0 * amount)).max(Vec2::ZERO),
        }
    }

    /// Overlap on both axes (strict, so touching edges don't collide)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.min.x + other.size.x
            && self.min.x + self.size.x > other.min.x
            && self.min.y < other.min.y + other.size.y
            && self.min.y + self.size.y > other.min.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.min.x + self.size.x
            && point.y >= self.min.y
            && point.y <= self.min.y + self.size.y
    }
}

/// The runner's full drawing box for the current pose and jump height
pub fn runner_hitbox(runner: &Runner, ground_y: f32) -> Rect {
    Rect::new(
        RUNNER_X,
        ground_y - runner.height() - runner.rise(),
        runner.width(),
        runner.height(),
    )
}

/// An obstacle's full drawing box
pub fn obstacle_hitbox(obstacle: &Obstacle) -> Rect {
    Rect {
        min: obstacle.pos,
        size: obstacle.size,
    }
}

/// Inset-AABB test between the runner and one obstacle
pub fn runner_hits(runner: &Runner, ground_y: f32, obstacle: &Obstacle) -> bool {
    runner_hitbox(runner, ground_y)
        .inset(HITBOX_INSET)
        .overlaps(&obstacle_hitbox(obstacle).inset(HITBOX_INSET))
}
