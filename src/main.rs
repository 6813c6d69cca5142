//! Seed Catcher headless runner
//!
//! Plays a session with a simple autopilot and logs what happens. Useful for
//! smoke-testing tuning files without a renderer.
//!
//! Usage: `seed-catcher [TUNING_JSON] [SEED] [FRAMES]`

use glam::Vec2;
use seed_catcher::consts::*;
use seed_catcher::sim::{GameEvent, GamePhase, GameState};
use seed_catcher::{Game, Tuning};

/// 60 Hz frame clock
const FRAME_MS: f64 = 1000.0 / 60.0;
const DEFAULT_FRAMES: u64 = 60 * 60 * 5;

fn main() {
    env_logger::init();
    log::info!("Seed Catcher (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(&path).unwrap_or_else(|e| {
            log::warn!("{e:#}; using default tuning");
            Tuning::default()
        }),
        None => Tuning::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5EED);
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut game = Game::new(seed, tuning);
    log::info!("Game initialized with seed: {}", seed);
    game.advance_phase_on_input();

    let mut now = 0.0;
    for _ in 0..frames {
        now += FRAME_MS;
        autopilot(&mut game);
        game.update(now);

        for event in game.events() {
            match event {
                GameEvent::LevelUp { level } => log::info!("Reached level {level}"),
                GameEvent::ClearBonus { cleared, points } => {
                    log::info!("Clear seed wiped {cleared} seeds for {points}")
                }
                GameEvent::GameOver => log::info!("Game over"),
                _ => log::trace!("{event:?}"),
            }
        }

        if game.state().phase == GamePhase::GameOver {
            break;
        }
    }

    let state = game.state();
    println!(
        "seed {seed}: score {} level {} holes {} after {:.1}s ({:?})",
        state.score,
        state.level,
        state.holes.len(),
        now / 1000.0,
        state.phase
    );
}

/// What the autopilot wants to do this frame
enum Plan {
    Wait,
    Walk(i8),
    Fire,
}

/// Walk under the lowest seed, then fire the tongue when it is in reach
fn autopilot(game: &mut Game) {
    let next = plan(game.state());
    match next {
        Plan::Wait => {
            game.stop_move_left();
            game.stop_move_right();
        }
        Plan::Walk(direction) if direction > 0 => {
            game.stop_move_left();
            game.start_move_right();
        }
        Plan::Walk(_) => {
            game.stop_move_right();
            game.start_move_left();
        }
        Plan::Fire => {
            game.stop_move_left();
            game.stop_move_right();
            game.extend_tongue();
        }
    }
}

fn plan(state: &GameState) -> Plan {
    if state.phase != GamePhase::Playing || state.tongue.is_active() {
        return Plan::Wait;
    }
    let Some(target) = most_dangerous_seed(state) else {
        return Plan::Wait;
    };

    // The tongue climbs at 45 degrees, so stand one "height" to the side
    let center = state.player.center();
    let rise = (center.y - target.y).max(0.0);
    let side: f32 = if target.x >= center.x { 1.0 } else { -1.0 };
    let aim_x = target.x - side * rise;

    let dx = aim_x - center.x;
    if dx.abs() > CHAR_SPEED_GRIDS {
        return Plan::Walk(dx.signum() as i8);
    }
    if side as i8 == state.player.direction {
        Plan::Fire
    } else {
        // Turn around in place
        Plan::Walk(side as i8)
    }
}

/// Center of the seed closest to the ground
fn most_dangerous_seed(state: &GameState) -> Option<Vec2> {
    state
        .seeds
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|s| s.center())
}
