//! Frame-driven simulation tick
//!
//! One call per rendered frame. Per-tick increments (tongue length, fall
//! distance) are applied once per call, while intervals compare the supplied
//! millisecond clock against stored timestamps.

use super::input::{TickInput, TongueCommand};
use super::state::{GamePhase, GameState};
use super::{collision, effects, player, progression, repair, spawner, tongue};
use crate::tuning::Tuning;

/// Advance the game state by one tick at time `now` (ms)
pub fn tick(state: &mut GameState, tuning: &Tuning, input: &TickInput, now: f64) {
    state.events.clear();

    match state.phase {
        GamePhase::Playing => tick_playing(state, tuning, input, now),
        GamePhase::Dying => player::update_dying(state),
        GamePhase::Title | GamePhase::GameOver => {}
    }

    effects::update(state, now);
}

fn tick_playing(state: &mut GameState, tuning: &Tuning, input: &TickInput, now: f64) {
    progression::update(state, tuning);

    match input.tongue {
        Some(TongueCommand::Extend) => {
            tongue::extend(state);
        }
        Some(TongueCommand::Retract) => {
            tongue::retract(state);
        }
        None => {}
    }
    player::update(state, input, now);
    tongue::update(state, tuning);

    spawner::advance_seeds(state, now);
    spawner::update(state, tuning, now);

    collision::update(state, tuning, now);

    repair::update(state, now);
}

/// Handle a "press anything" input: title starts play, game over resets.
///
/// Returns true if the input was consumed by a phase change.
pub fn advance_phase(state: &mut GameState, tuning: &Tuning) -> bool {
    match state.phase {
        GamePhase::Title => {
            state.phase = GamePhase::Playing;
            log::info!("Game started (seed {})", state.seed);
            true
        }
        GamePhase::GameOver => {
            state.reset(tuning);
            log::info!("Game reset to title");
            true
        }
        GamePhase::Playing | GamePhase::Dying => false,
    }
}
