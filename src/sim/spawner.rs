//! Seed spawning and falling
//!
//! Spawns are scheduled against the externally supplied clock; falling is
//! integrated once per tick.

use rand::Rng;

use super::events::GameEvent;
use super::rng::NormalSampler;
use super::state::{GameState, Seed, SeedKind};
use crate::consts::*;
use crate::tuning::{SeedWeights, Tuning};

/// Spawn a seed when due and schedule the next one
pub fn update(state: &mut GameState, tuning: &Tuning, now: f64) {
    let Some(next_spawn) = state.next_spawn_time else {
        // Opening spawn uses the base interval with no jitter
        state.next_spawn_time = Some(now + state.spawn_interval);
        return;
    };

    if now < next_spawn {
        return;
    }

    spawn_seed(state, tuning);

    let interval = state.spawn_interval;
    let variation = interval * tuning.spawn_variation_ratio;
    let offset = state.rng.random_range(-1.0..1.0) * variation;
    state.next_spawn_time = Some(now + interval + offset);
}

/// Create a seed at the top of a random column. Returns its id.
pub fn spawn_seed(state: &mut GameState, tuning: &Tuning) -> u32 {
    let kind = pick_kind(&tuning.seed_weights, state.rng.random());
    let columns = (SCREEN_WIDTH_GRIDS - SEED_SIZE_GRIDS) as u32;
    let x = state.rng.random_range(0..columns) as f32;
    let speed = sample_speed(&mut state.normal, &mut state.rng, tuning);

    let id = state.next_entity_id();
    state.seeds.push(Seed::new(id, x, kind, speed));
    log::debug!("Spawned {kind:?} seed {id} at column {x} (speed {speed:.4})");
    id
}

/// Map a uniform roll in [0, 1) to a seed type
pub fn pick_kind(weights: &SeedWeights, roll: f32) -> SeedKind {
    if roll < weights.clear {
        SeedKind::Clear
    } else if roll < weights.clear + weights.repair {
        SeedKind::Repair
    } else {
        SeedKind::Normal
    }
}

/// Normally distributed fall speed, clamped to the variation band then floored
pub fn sample_speed<R: Rng + ?Sized>(normal: &mut NormalSampler, rng: &mut R, tuning: &Tuning) -> f32 {
    let mean = tuning.mean_seed_speed;
    let variation = mean * tuning.seed_speed_variation_ratio;
    let std_dev = variation / 2.0;

    let speed = normal.sample(rng) * std_dev + mean;
    speed
        .clamp(mean - variation, mean + variation)
        .max(tuning.min_seed_speed)
}

/// Drop every seed one tick; seeds reaching the ground open a hole
pub fn advance_seeds(state: &mut GameState, now: f64) {
    let multiplier = state.speed_multiplier;

    for seed in &mut state.seeds {
        seed.pos.y += seed.speed * multiplier;

        if now - seed.last_anim_time > SEED_ANIMATION_SPEED {
            seed.anim_index = (seed.anim_index + 1) % SEED_ANIMATION_SEQUENCE.len();
            seed.frame = SEED_ANIMATION_SEQUENCE[seed.anim_index];
            seed.last_anim_time = now;
        }
    }

    let mut landed = Vec::new();
    state.seeds.retain(|seed| {
        if seed.pos.y + seed.size.y >= GROUND_Y_GRIDS {
            landed.push(seed.pos.x.floor() as i32);
            false
        } else {
            true
        }
    });

    for x in landed {
        if state.open_hole(x) {
            log::debug!("Hole opened at column {x}");
            state.emit(GameEvent::HoleOpened { x });
        }
    }
}
