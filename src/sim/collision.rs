//! Catch detection, catch effects and player hits
//!
//! The tongue tip is a circle against each seed's approximate circle; the
//! player is an AABB against each seed's AABB.

use super::events::GameEvent;
use super::state::{GamePhase, GameState, SeedKind, TongueMode, nearest_hole};
use crate::consts::*;
use crate::rects_overlap;
use crate::tuning::Tuning;

/// Run catch detection (extending tongue only) and the fatal player check
pub fn update(state: &mut GameState, tuning: &Tuning, now: f64) {
    if state.tongue.is_extending() && tuning.scoring_enabled() {
        check_tongue_catch(state, tuning, now);
    }
    check_player_hit(state);
}

/// Catch at most one seed, scanning in spawn order. Returns the caught type.
pub fn check_tongue_catch(state: &mut GameState, tuning: &Tuning, now: f64) -> Option<SeedKind> {
    let tip = state.tongue.tip;
    let index = state.seeds.iter().position(|seed| {
        tip.distance(seed.center()) < TONGUE_TIP_COLLISION_RADIUS_GRIDS + seed.radius()
    })?;

    let seed = state.seeds.remove(index);
    let kind = seed.kind;
    let points = tuning.points_for_height(seed.pos.y);
    state.score += points;
    state.push_floating_score(points, seed.pos, now);
    state.emit(GameEvent::Catch { kind, points });
    log::debug!("Caught {kind:?} seed {} at y={:.2} for {points}", seed.id, seed.pos.y);
    state.caught_seeds.push(seed);

    match kind {
        SeedKind::Normal => {}
        SeedKind::Repair => repair_nearest(state),
        SeedKind::Clear => clear_seeds(state, tuning, now),
    }

    state.tongue.mode = TongueMode::Retracting;
    Some(kind)
}

/// Queue the hole nearest the player's center
fn repair_nearest(state: &mut GameState) {
    let center_x = state.player.center().x;
    if let Some(x) = nearest_hole(center_x, &state.holes) {
        state.enqueue_repair(x);
    }
}

/// Bonus-score and remove every active seed, then repair one hole per cleared seed
fn clear_seeds(state: &mut GameState, tuning: &Tuning, now: f64) {
    let cleared = std::mem::take(&mut state.seeds);
    if cleared.is_empty() {
        return;
    }

    let bonus = tuning.clear_bonus_points;
    for seed in &cleared {
        state.score += bonus;
        state.push_floating_score(bonus, seed.pos, now);
    }
    state.emit(GameEvent::ClearBonus {
        cleared: cleared.len() as u32,
        points: bonus * cleared.len() as u64,
    });

    // Greedy nearest-first without picking the same hole twice
    let center_x = state.player.center().x;
    let mut available = state.holes.clone();
    for _ in 0..cleared.len() {
        let Some(x) = nearest_hole(center_x, &available) else {
            break;
        };
        available.retain(|&hole| hole != x);
        state.enqueue_repair(x);
    }
}

/// Any seed touching the player ends the run. Returns true on a hit.
pub fn check_player_hit(state: &mut GameState) -> bool {
    let player = &state.player;
    let hit = state
        .seeds
        .iter()
        .any(|seed| rects_overlap(player.pos, player.size, seed.pos, seed.size));

    if hit {
        state.phase = GamePhase::Dying;
        state.emit(GameEvent::PlayerStruck);
        log::info!("Player struck at score {}", state.score);
    }
    hit
}
