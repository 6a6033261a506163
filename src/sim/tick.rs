//! Per-frame simulation tick
//!
//! Fixed pipeline order: physics & input, then world generation, then
//! collision and scoring. Rendering happens after the tick, in the host,
//! so a frame never draws a position that hasn't been collision-checked.

use crate::consts::*;

use super::state::{GameEvent, GameState, SessionPhase};
use super::{collision, physics, world};

/// Input commands for a single tick
///
/// `jump` and `restart` are one-shots the host clears after each tick;
/// `duck` reflects whether the duck control is currently held.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub jump: bool,
    pub duck: bool,
    pub restart: bool,
}

/// Advance the session by one tick and report what happened.
///
/// Terminal sessions ignore everything except `restart`; a `Ready` session
/// waits for the first jump. No side effects are performed here - the host
/// plays sounds, persists the best score, and fires the outward report from
/// the returned events.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        SessionPhase::Ready => {
            if !input.jump {
                return events;
            }
            state.phase = SessionPhase::Running;
            events.push(GameEvent::Started);
            // Fall through so the starting jump happens this same tick
        }
        SessionPhase::Over => {
            if input.restart {
                state.reset();
                events.push(GameEvent::Restarted);
            }
            return events;
        }
        SessionPhase::Running => {}
    }

    state.frame += 1;

    // Physics & input
    if physics::control(&mut state.runner, input) {
        events.push(GameEvent::Jumped);
    }
    physics::integrate(&mut state.runner, input.duck);

    // Procedural world
    world::advance(state);

    // Collision: the first hit ends the session
    let ground_y = state.ground_y();
    if state
        .obstacles
        .iter()
        .any(|o| collision::runner_hits(&state.runner, ground_y, o))
    {
        state.phase = SessionPhase::Over;
        events.push(GameEvent::Crashed { score: state.score });
        return events;
    }

    // Scoring and milestone flash
    if state.frame % SCORE_INTERVAL == 0 {
        state.score += 1;
        if state.score % MILESTONE_STEP == 0 {
            state.milestone_flash = MILESTONE_FLASH_TICKS;
            events.push(GameEvent::Milestone);
        }
    }
    if state.milestone_flash > 0 {
        state.milestone_flash -= 1;
    }

    // Speed ramp, unbounded
    state.speed += SPEED_INCREMENT;

    events
}
