//! Session state and core simulation types
//!
//! One `GameState` value is one play-through. It owns everything, including
//! the RNG, so sessions are independently testable and two games can run on
//! the same page without sharing state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Mounted but not started; world holds still until the first jump
    Ready,
    /// Active gameplay
    Running,
    /// Session ended by a collision
    Over,
}

/// What the runner is doing right now
///
/// Airborne carries the vertical offset and velocity, so a ducking runner in
/// the air is unrepresentable. Negative `y` is up (canvas coordinates); the
/// ground reference is 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunnerPose {
    /// On the ground, full height
    Running,
    /// Mid-jump
    Airborne { y: f32, velocity: f32 },
    /// On the ground, reduced height while the duck input is held
    Ducking,
}

/// The player-controlled entity
#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    pub pose: RunnerPose,
    /// Two-frame run/duck animation
    pub anim_frame: u8,
    anim_counter: u8,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            pose: RunnerPose::Running,
            anim_frame: 0,
            anim_counter: 0,
        }
    }
}

impl Runner {
    pub fn width(&self) -> f32 {
        RUNNER_WIDTH
    }

    /// Current silhouette height (reduced while ducking)
    pub fn height(&self) -> f32 {
        match self.pose {
            RunnerPose::Ducking => RUNNER_DUCK_HEIGHT,
            _ => RUNNER_HEIGHT,
        }
    }

    /// Height above the ground reference, >= 0
    pub fn rise(&self) -> f32 {
        match self.pose {
            RunnerPose::Airborne { y, .. } => -y.min(0.0),
            _ => 0.0,
        }
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self.pose, RunnerPose::Airborne { .. })
    }

    /// Advance the two-frame animation on its own cadence
    pub fn advance_animation(&mut self) {
        self.anim_counter += 1;
        if self.anim_counter >= RUN_ANIM_PERIOD {
            self.anim_frame ^= 1;
            self.anim_counter = 0;
        }
    }
}

/// The six ground-obstacle silhouettes (width, height)
pub const CACTUS_VARIANTS: [Vec2; 6] = [
    Vec2::new(17.0, 35.0),
    Vec2::new(34.0, 35.0),
    Vec2::new(51.0, 35.0),
    Vec2::new(25.0, 50.0),
    Vec2::new(50.0, 50.0),
    Vec2::new(75.0, 50.0),
];

/// Obstacle kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Ground obstacle; `variant` indexes [`CACTUS_VARIANTS`]
    Cactus { variant: usize },
    /// Flying obstacle with its own two-frame animation
    Bird { anim_frame: u8, anim_counter: u8 },
}

/// An entity to avoid; scrolls left at world speed
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    /// Fully past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }

    /// Advance the bird flap animation; no-op for ground obstacles
    pub fn advance_animation(&mut self) {
        if let ObstacleKind::Bird {
            anim_frame,
            anim_counter,
        } = &mut self.kind
        {
            *anim_counter += 1;
            if *anim_counter >= BIRD_ANIM_PERIOD {
                *anim_frame ^= 1;
                *anim_counter = 0;
            }
        }
    }
}

/// Purely visual; drifts at half world speed, no collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub pos: Vec2,
}

impl Cloud {
    pub fn is_offscreen(&self) -> bool {
        self.pos.x + CLOUD_WIDTH < 0.0
    }
}

/// Night-sky decoration, regenerated on each flip to night
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub visible: bool,
}

/// Night-sky decoration, one per night
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moon {
    pub pos: Vec2,
    pub radius: f32,
}

/// Things that happened during a tick and need a side effect
///
/// The tick itself performs none: the host loop plays sounds, persists the
/// best score, and reports the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First jump took the session out of `Ready`
    Started,
    /// A jump actually launched (not a mid-air press)
    Jumped,
    /// Score crossed a multiple of [`MILESTONE_STEP`]
    Milestone,
    /// Collision ended the session; carries the raw final score
    Crashed { score: u32 },
    /// A terminal session was replaced with a fresh running one
    Restarted,
}

/// Complete session state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Viewport size in canvas pixels
    pub width: f32,
    pub height: f32,
    pub phase: SessionPhase,
    pub runner: Runner,
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub stars: Vec<Star>,
    pub moon: Option<Moon>,
    pub night: bool,
    /// World scroll speed; only ever increases within a session
    pub speed: f32,
    /// Tick counter
    pub frame: u64,
    pub score: u32,
    /// Frame at which the last obstacle spawned
    pub last_spawn_frame: u64,
    /// Frames until the next spawn, resampled after each spawn
    pub next_spawn_gap: f32,
    /// Remaining flash frames; > 0 means the milestone cue is showing
    pub milestone_flash: u32,
    /// Accumulated ground scroll in px; the renderer wraps it to the
    /// track texture's tile width
    pub track_offset: f32,
}

impl GameState {
    /// Create a new session in `Ready` with the given seed and viewport
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let next_spawn_gap = SPAWN_GAP_MIN + rng.random::<f32>() * SPAWN_GAP_MAX;
        Self {
            seed,
            rng,
            width,
            height,
            phase: SessionPhase::Ready,
            runner: Runner::default(),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            stars: Vec::new(),
            moon: None,
            night: false,
            speed: BASE_SPEED,
            frame: 0,
            score: 0,
            last_spawn_frame: 0,
            next_spawn_gap,
            milestone_flash: 0,
            track_offset: 0.0,
        }
    }

    /// y coordinate of the ground line
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_HEIGHT
    }

    /// Whether the milestone flash cue is currently showing
    pub fn milestone_active(&self) -> bool {
        self.milestone_flash > 0
    }

    /// Scatter a few clouds so a fresh mount isn't an empty sky
    pub fn seed_initial_clouds(&mut self) {
        for _ in 0..3 {
            let x = self.rng.random::<f32>() * self.width;
            let y = 20.0 + self.rng.random::<f32>() * 50.0;
            self.clouds.push(Cloud {
                pos: Vec2::new(x, y),
            });
        }
    }

    /// Replace this session with a fresh one and go straight to `Running`
    ///
    /// The new seed is drawn from the old RNG, so a seeded session stays
    /// reproducible across restarts.
    pub fn reset(&mut self) {
        let reseed = self.rng.random::<u64>();
        *self = GameState::new(reseed, self.width, self.height);
        self.phase = SessionPhase::Running;
    }

    /// Track a viewport resize; entity positions are left where they are
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_ready_at_base_speed() {
        let state = GameState::new(7, 600.0, 750.0);
        assert_eq!(state.phase, SessionPhase::Ready);
        assert_eq!(state.speed, crate::consts::BASE_SPEED);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert!(!state.night);
    }

    #[test]
    fn test_reset_clears_collections_and_enters_running() {
        let mut state = GameState::new(7, 600.0, 750.0);
        state.seed_initial_clouds();
        state.phase = SessionPhase::Over;
        state.score = 321;
        state.speed = 9.5;
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::Cactus { variant: 0 },
            pos: Vec2::new(100.0, 100.0),
            size: CACTUS_VARIANTS[0],
        });

        state.reset();

        assert_eq!(state.phase, SessionPhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, crate::consts::BASE_SPEED);
        assert!(state.obstacles.is_empty());
        assert!(state.clouds.is_empty());
        assert!(state.stars.is_empty());
        assert!(state.moon.is_none());
    }

    #[test]
    fn test_runner_height_tracks_pose() {
        let mut runner = Runner::default();
        assert_eq!(runner.height(), crate::consts::RUNNER_HEIGHT);
        runner.pose = RunnerPose::Ducking;
        assert_eq!(runner.height(), crate::consts::RUNNER_DUCK_HEIGHT);
        runner.pose = RunnerPose::Airborne {
            y: -30.0,
            velocity: 2.0,
        };
        assert_eq!(runner.height(), crate::consts::RUNNER_HEIGHT);
        assert_eq!(runner.rise(), 30.0);
    }

    #[test]
    fn test_same_seed_same_initial_state() {
        let a = GameState::new(42, 600.0, 750.0);
        let b = GameState::new(42, 600.0, 750.0);
        assert_eq!(a.next_spawn_gap, b.next_spawn_gap);
    }
}
