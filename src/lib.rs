//! Seed Catcher - simulation core for a single-screen seed-catching game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (phases, tongue, seeds, holes, scoring)
//! - `tuning`: Data-driven game balance (score tiers, difficulty tiers)
//! - `game`: Intent API and tick entry point for frontends

pub mod game;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (all distances in grid units)
pub mod consts {
    /// World dimensions
    pub const SCREEN_WIDTH_GRIDS: f32 = 30.0;
    pub const SCREEN_HEIGHT_GRIDS: f32 = 22.0;
    /// The ground is the last grid row
    pub const GROUND_Y_GRIDS: f32 = SCREEN_HEIGHT_GRIDS - 1.0;

    /// Player defaults
    pub const CHAR_SIZE_GRIDS: f32 = 1.0;
    /// Distance covered by one throttled move step
    pub const CHAR_SPEED_GRIDS: f32 = 0.5;
    /// Grids per tick while sinking through the floor
    pub const PLAYER_DEATH_SPEED: f32 = 0.033;
    pub const PLAYER_WALK_FRAMES: u32 = 10;
    /// ms per walk frame
    pub const PLAYER_ANIMATION_SPEED: f64 = 100.0;

    /// Tongue tip hit radius, added to the seed's half-diagonal
    pub const TONGUE_TIP_COLLISION_RADIUS_GRIDS: f32 = 0.6;
    /// Tongue always points 45 degrees upward
    pub const TONGUE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Seed defaults
    pub const SEED_SIZE_GRIDS: f32 = 1.0;
    pub const SEED_ANIMATION_SEQUENCE: [u32; 6] = [0, 1, 1, 0, 2, 2];
    /// ms per seed animation step
    pub const SEED_ANIMATION_SPEED: f64 = 300.0;

    /// Progression
    pub const INITIAL_LEVEL: u32 = 1;
    pub const POINTS_PER_LEVEL: u64 = 5000;

    /// Hole repair animation length (ms)
    pub const FALLING_BLOCK_DURATION: f64 = 500.0;
    /// Floating score lifetime (ms)
    pub const FLOATING_SCORE_FADE: f64 = 1000.0;
}

/// Quadratic ease-out, `t` in [0, 1]
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Axis-aligned overlap test between two rectangles given as (top-left, size)
#[inline]
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Tongue tip for a given base, length and facing direction (+1 right, -1 left)
#[inline]
pub fn tongue_tip(base: Vec2, length: f32, direction: i8) -> Vec2 {
    let (sin, cos) = consts::TONGUE_ANGLE.sin_cos();
    Vec2::new(
        base.x + f32::from(direction) * length * cos,
        base.y - length * sin,
    )
}
