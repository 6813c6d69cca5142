//! Player movement and death animation

use super::events::GameEvent;
use super::input::TickInput;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Apply held directions, animate, and take a throttled move step
pub fn update(state: &mut GameState, input: &TickInput, now: f64) {
    // Movement is frozen while the tongue is out
    if state.tongue.is_active() {
        state.player.dx = 0.0;
    } else if input.right {
        state.player.dx = CHAR_SPEED_GRIDS;
        state.player.direction = 1;
    } else if input.left {
        state.player.dx = -CHAR_SPEED_GRIDS;
        state.player.direction = -1;
    } else {
        state.player.dx = 0.0;
    }

    if state.player.dx != 0.0 {
        if now - state.last_walk_frame_time > PLAYER_ANIMATION_SPEED {
            state.player.frame = (state.player.frame + 1) % PLAYER_WALK_FRAMES;
            state.last_walk_frame_time = now;
            state.emit(GameEvent::Step);
        }
    } else {
        state.player.frame = 0;
    }

    if now - state.last_move_time > state.move_interval {
        step(state);
        state.last_move_time = now;
    }
}

/// Move one step along `dx`, refusing to walk into a hole and clamping to the walls
pub fn step(state: &mut GameState) {
    let player = &mut state.player;
    if player.dx == 0.0 {
        return;
    }

    let new_x = player.pos.x + player.dx;
    if !overlaps_hole(&state.holes, new_x, player.size.x) {
        player.pos.x = new_x;
    }

    player.pos.x = player.pos.x.clamp(0.0, SCREEN_WIDTH_GRIDS - player.size.x);
}

/// Whether a footprint starting at `x` overlaps any hole column
pub fn overlaps_hole(holes: &[i32], x: f32, width: f32) -> bool {
    holes.iter().any(|&hole| {
        let hole_x = hole as f32;
        x < hole_x + SEED_SIZE_GRIDS && x + width > hole_x
    })
}

/// Sink through the floor; once off-screen the run is over
pub fn update_dying(state: &mut GameState) {
    state.player.pos.y += PLAYER_DEATH_SPEED;

    if state.player.pos.y > SCREEN_HEIGHT_GRIDS {
        state.phase = GamePhase::GameOver;
        state.emit(GameEvent::GameOver);
        log::info!("Game over: score {}, level {}", state.score, state.level);
    }
}
