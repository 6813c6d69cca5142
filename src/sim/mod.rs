//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes from the caller, never the wall clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order for seeds, opening order for holes)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod effects;
pub mod events;
pub mod input;
pub mod player;
pub mod progression;
pub mod repair;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod tongue;

pub use events::GameEvent;
pub use input::{TickInput, TongueCommand};
pub use rng::NormalSampler;
pub use state::{
    FallingBlock, FloatingScore, GamePhase, GameState, Particle, Player, Seed, SeedKind, Tongue,
    TongueMode, MAX_PARTICLES,
};
pub use tick::{advance_phase, tick};
