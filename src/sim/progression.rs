//! Level progression and difficulty scaling

use super::effects;
use super::events::GameEvent;
use super::state::GameState;
use crate::consts::*;
use crate::tuning::Tuning;

/// Level implied by a score
pub fn level_for_score(score: u64) -> u32 {
    INITIAL_LEVEL + (score / POINTS_PER_LEVEL) as u32
}

/// Apply every level gained since the last tick. Returns the number of levels gained.
///
/// Inert while no difficulty tiers are loaded.
pub fn update(state: &mut GameState, tuning: &Tuning) -> u32 {
    if tuning.difficulty_tiers.is_empty() {
        return 0;
    }

    let new_level = level_for_score(state.score);
    if new_level <= state.level {
        return 0;
    }

    let old_level = state.level;
    for level in old_level + 1..=new_level {
        let Some(tier) = tuning.tier_for_level(level) else {
            continue;
        };
        state.speed_multiplier += tier.speed_increase.at(level);
        state.spawn_interval -= f64::from(tier.spawn_interval_reduction.at(level));
        state.tongue_speed += tier.tongue_speed_increase.at(level);
        state.move_interval =
            (state.move_interval - f64::from(tier.move_interval_reduction.at(level))).max(0.0);
        state.emit(GameEvent::LevelUp { level });
    }

    state.spawn_interval = state.spawn_interval.max(tuning.min_spawn_interval);
    state.level = new_level;

    log::info!(
        "Level {} -> {}: speed x{:.2}, spawn {:.0}ms, tongue {:.2}, move {:.0}ms",
        old_level,
        new_level,
        state.speed_multiplier,
        state.spawn_interval,
        state.tongue_speed,
        state.move_interval
    );

    effects::launch_fireworks(state);
    new_level - old_level
}
