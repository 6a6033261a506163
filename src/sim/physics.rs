//! Runner physics: jump impulse, gravity integration, duck hold
//!
//! Pure state transitions; the jump sound comes out of `tick` as a
//! [`GameEvent`](super::GameEvent), not from here.

use crate::consts::*;

use super::state::{Runner, RunnerPose};
use super::tick::TickInput;

/// Map this tick's input onto the runner.
///
/// Returns true when a jump actually launches. A jump press while airborne
/// is a no-op, as is a duck press; a held duck is re-applied on landing by
/// [`integrate`].
pub fn control(runner: &mut Runner, input: &TickInput) -> bool {
    if input.jump && !runner.is_airborne() {
        runner.pose = RunnerPose::Airborne {
            y: 0.0,
            velocity: -JUMP_FORCE,
        };
        return true;
    }

    match (&runner.pose, input.duck) {
        (RunnerPose::Running, true) => runner.pose = RunnerPose::Ducking,
        (RunnerPose::Ducking, false) => runner.pose = RunnerPose::Running,
        _ => {}
    }

    false
}

/// Advance one tick of vertical motion.
///
/// While airborne: `y += velocity; velocity += GRAVITY`. Crossing back to
/// the ground reference lands the runner, which zeroes velocity by
/// construction (the `Airborne` variant is dropped).
pub fn integrate(runner: &mut Runner, duck_held: bool) {
    if let RunnerPose::Airborne { y, velocity } = &mut runner.pose {
        *y += *velocity;
        *velocity += GRAVITY;

        if *y >= 0.0 {
            runner.pose = if duck_held {
                RunnerPose::Ducking
            } else {
                RunnerPose::Running
            };
        }
    }

    runner.advance_animation();
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn jump_input() -> TickInput {
        TickInput {
            jump: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_jump_sets_impulse() {
        let mut runner = Runner::default();
        assert!(control(&mut runner, &jump_input()));
        assert_eq!(
            runner.pose,
            RunnerPose::Airborne {
                y: 0.0,
                velocity: -JUMP_FORCE
            }
        );
    }

    #[test]
    fn test_second_jump_midair_is_noop() {
        let mut runner = Runner::default();
        control(&mut runner, &jump_input());
        integrate(&mut runner, false);
        let before = runner.pose;
        assert!(!control(&mut runner, &jump_input()));
        assert_eq!(runner.pose, before);
    }

    #[test]
    fn test_jump_overrides_duck() {
        let mut runner = Runner::default();
        runner.pose = RunnerPose::Ducking;
        assert!(control(&mut runner, &jump_input()));
        assert!(runner.is_airborne());
    }

    #[test]
    fn test_duck_ignored_while_airborne() {
        let mut runner = Runner::default();
        control(&mut runner, &jump_input());
        let duck = TickInput {
            duck: true,
            ..Default::default()
        };
        control(&mut runner, &duck);
        assert!(runner.is_airborne());
    }

    #[test]
    fn test_duck_hold_and_release() {
        let mut runner = Runner::default();
        let duck = TickInput {
            duck: true,
            ..Default::default()
        };
        control(&mut runner, &duck);
        assert_eq!(runner.pose, RunnerPose::Ducking);
        control(&mut runner, &TickInput::default());
        assert_eq!(runner.pose, RunnerPose::Running);
    }

    #[test]
    fn test_full_arc_lands_back_on_ground() {
        let mut runner = Runner::default();
        control(&mut runner, &jump_input());

        let mut ticks = 0;
        while runner.is_airborne() {
            integrate(&mut runner, false);
            ticks += 1;
            assert!(ticks < 200, "runner never landed");
        }
        assert_eq!(runner.pose, RunnerPose::Running);
        assert_eq!(runner.rise(), 0.0);
    }

    #[test]
    fn test_landing_with_duck_held_ducks() {
        let mut runner = Runner::default();
        control(&mut runner, &jump_input());
        while runner.is_airborne() {
            integrate(&mut runner, true);
        }
        assert_eq!(runner.pose, RunnerPose::Ducking);
    }

    proptest! {
        /// One integration step matches the closed form while still airborne.
        #[test]
        fn prop_integration_step(y in -200.0f32..-1.0, velocity in -12.0f32..12.0) {
            let mut runner = Runner::default();
            runner.pose = RunnerPose::Airborne { y, velocity };
            integrate(&mut runner, false);
            match runner.pose {
                RunnerPose::Airborne { y: y2, velocity: v2 } => {
                    prop_assert_eq!(y2, y + velocity);
                    prop_assert_eq!(v2, velocity + GRAVITY);
                }
                // Crossed the ground reference this step
                _ => prop_assert!(y + velocity >= 0.0),
            }
        }

        /// Jump arcs always terminate on the ground regardless of phase jitter.
        #[test]
        fn prop_arc_terminates(pre_ticks in 0u8..4) {
            let mut runner = Runner::default();
            for _ in 0..pre_ticks {
                runner.advance_animation();
            }
            control(&mut runner, &TickInput { jump: true, ..Default::default() });
            for _ in 0..200 {
                integrate(&mut runner, false);
            }
            prop_assert!(!runner.is_airborne());
        }
    }
}
