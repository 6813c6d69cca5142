//! Hole repair animation
//!
//! The repair queue drains one column per tick into a falling block. When the
//! block lands the hole under it is closed.

use super::events::GameEvent;
use super::state::{FallingBlock, GameState};
use crate::consts::*;
use crate::ease_out_quad;

pub fn update(state: &mut GameState, now: f64) {
    process_queue(state, now);
    advance_blocks(state, now);
}

/// Start at most one falling block from the front of the queue
pub fn process_queue(state: &mut GameState, now: f64) {
    let Some(x) = state.repair_queue.pop_front() else {
        return;
    };

    if state.falling_blocks.contains_key(&x) {
        return;
    }

    state.falling_blocks.insert(
        x,
        FallingBlock {
            x,
            y: 0.0,
            target_y: GROUND_Y_GRIDS,
            start_time: now,
            duration: FALLING_BLOCK_DURATION,
        },
    );
    log::debug!("Repair block dropping into column {x}");
}

/// Ease blocks toward the ground; landed blocks close their hole
pub fn advance_blocks(state: &mut GameState, now: f64) {
    let mut landed = Vec::new();

    for (&x, block) in state.falling_blocks.iter_mut() {
        let progress = ((now - block.start_time) / block.duration).max(0.0);
        if progress >= 1.0 {
            block.y = block.target_y;
            landed.push(x);
        } else {
            block.y = block.target_y * ease_out_quad(progress as f32);
        }
    }

    for x in landed {
        state.falling_blocks.remove(&x);
        if state.close_hole(x) {
            log::debug!("Hole at column {x} repaired");
            state.emit(GameEvent::HoleRepaired { x });
        }
    }
}
