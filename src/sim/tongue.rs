//! Tongue extend/retract state machine
//!
//! `Idle -> Extending -> Retracting -> Idle`. Extension speed scales with the
//! game speed multiplier; retraction speed is fixed.

use super::events::GameEvent;
use super::state::{GameState, TongueMode};
use crate::consts::*;
use crate::tuning::Tuning;

/// Start extending in the player's facing direction. Ignored unless idle.
pub fn extend(state: &mut GameState) -> bool {
    if state.tongue.is_active() {
        return false;
    }
    state.tongue.mode = TongueMode::Extending;
    state.tongue.direction = state.player.direction;
    state.emit(GameEvent::TongueExtended);
    true
}

/// Switch to retracting. Ignored unless extending.
pub fn retract(state: &mut GameState) -> bool {
    if !state.tongue.is_extending() {
        return false;
    }
    state.tongue.mode = TongueMode::Retracting;
    true
}

/// Advance length and tip by one tick
pub fn update(state: &mut GameState, tuning: &Tuning) {
    let tongue = &mut state.tongue;
    tongue.base = state.player.center();

    match tongue.mode {
        TongueMode::Extending => {
            tongue.length += state.tongue_speed * state.speed_multiplier;
            tongue.update_tip();

            let tip = tongue.tip;
            if tip.x < 0.0 || tip.x > SCREEN_WIDTH_GRIDS || tip.y < 0.0 {
                tongue.mode = TongueMode::Retracting;
            }
        }
        TongueMode::Retracting => {
            tongue.length -= tuning.tongue_retract_speed;
            if tongue.length <= 0.0 {
                tongue.length = 0.0;
                tongue.mode = TongueMode::Idle;
                state.caught_seeds.clear();
            }
        }
        TongueMode::Idle => {}
    }

    state.tongue.update_tip();

    // Caught seeds ride the tip
    let tip = state.tongue.tip;
    for seed in &mut state.caught_seeds {
        seed.pos = tip - seed.size / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GamePhase, Seed, SeedKind};
    use glam::Vec2;

    fn state_at(center: Vec2) -> GameState {
        let mut state = GameState::new(1, &Tuning::default());
        state.phase = GamePhase::Playing;
        state.player.pos = center - state.player.size / 2.0;
        state
    }

    #[test]
    fn test_extend_three_ticks() {
        let tuning = Tuning::default();
        let mut state = state_at(Vec2::new(15.0, 10.0));
        state.tongue_speed = 1.0;

        assert!(extend(&mut state));
        for _ in 0..3 {
            update(&mut state, &tuning);
        }
        assert!(state.tongue.is_extending());
        assert!((state.tongue.length - 3.0).abs() < 1e-6);
        assert!((state.tongue.tip.x - 17.12).abs() < 0.01);
        assert!((state.tongue.tip.y - 7.88).abs() < 0.01);
    }

    #[test]
    fn test_extend_uses_facing_and_multiplier() {
        let tuning = Tuning::default();
        let mut state = state_at(Vec2::new(15.0, 10.0));
        state.player.direction = -1;
        state.tongue_speed = 0.5;
        state.speed_multiplier = 2.0;

        extend(&mut state);
        update(&mut state, &tuning);
        assert_eq!(state.tongue.direction, -1);
        assert!((state.tongue.length - 1.0).abs() < 1e-6);
        assert!(state.tongue.tip.x < 15.0);
    }

    #[test]
    fn test_invalid_intents_ignored() {
        let mut state = state_at(Vec2::new(15.0, 10.0));
        assert!(!retract(&mut state));
        assert_eq!(state.tongue.mode, TongueMode::Idle);

        assert!(extend(&mut state));
        assert!(!extend(&mut state));
        assert!(retract(&mut state));
        assert!(!extend(&mut state));
        assert!(!retract(&mut state));
        assert_eq!(state.tongue.mode, TongueMode::Retracting);
    }

    #[test]
    fn test_boundary_forces_retract() {
        let tuning = Tuning::default();
        let mut state = state_at(Vec2::new(29.0, 20.0));
        state.tongue_speed = 1.0;
        extend(&mut state);

        // cos(45) * 2 > 1 grid to the right wall
        update(&mut state, &tuning);
        assert!(state.tongue.is_extending());
        update(&mut state, &tuning);
        assert!(state.tongue.is_retracting());
    }

    #[test]
    fn test_full_retract_clears_caught_seeds() {
        let tuning = Tuning::default();
        let mut state = state_at(Vec2::new(15.0, 10.0));
        state.tongue.mode = TongueMode::Retracting;
        state.tongue.length = 4.0;
        state.caught_seeds.push(Seed::new(1, 3.0, SeedKind::Normal, 0.04));

        update(&mut state, &tuning);
        assert!((state.tongue.length - 1.0).abs() < 1e-6);
        assert_eq!(state.caught_seeds.len(), 1);
        // Seed follows the tip
        assert!((state.caught_seeds[0].center() - state.tongue.tip).length() < 1e-5);

        update(&mut state, &tuning);
        assert_eq!(state.tongue.length, 0.0);
        assert_eq!(state.tongue.mode, TongueMode::Idle);
        assert!(state.caught_seeds.is_empty());
    }
}
