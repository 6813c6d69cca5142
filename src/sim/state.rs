//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives in [`GameState`].

use std::collections::{BTreeMap, VecDeque};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::rng::NormalSampler;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::tongue_tip;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for any input
    Title,
    /// Active gameplay
    Playing,
    /// Player struck, sinking through the floor
    Dying,
    /// Run ended, waiting for restart input
    GameOver,
}

/// Seed types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeedKind {
    #[default]
    Normal,
    /// Queues the hole nearest the player for repair
    Repair,
    /// Clears every other seed and repairs one hole per cleared seed
    Clear,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal step applied on each permitted move
    pub dx: f32,
    /// 1 for right, -1 for left
    pub direction: i8,
    /// Walk animation frame
    pub frame: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                SCREEN_WIDTH_GRIDS / 2.0 - CHAR_SIZE_GRIDS / 2.0,
                GROUND_Y_GRIDS - CHAR_SIZE_GRIDS,
            ),
            size: Vec2::splat(CHAR_SIZE_GRIDS),
            dx: 0.0,
            direction: 1,
            frame: 0,
        }
    }
}

impl Player {
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Tongue sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TongueMode {
    #[default]
    Idle,
    Extending,
    Retracting,
}

/// The player's tongue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tongue {
    /// Base position (player's mouth), refreshed every tick
    pub base: Vec2,
    pub length: f32,
    pub mode: TongueMode,
    /// Direction captured when extension started
    pub direction: i8,
    pub tip: Vec2,
}

impl Tongue {
    pub fn is_extending(&self) -> bool {
        self.mode == TongueMode::Extending
    }

    pub fn is_retracting(&self) -> bool {
        self.mode == TongueMode::Retracting
    }

    /// Extending or retracting
    pub fn is_active(&self) -> bool {
        self.mode != TongueMode::Idle
    }

    /// Recompute the tip from base, length and direction
    pub fn update_tip(&mut self) {
        self.tip = tongue_tip(self.base, self.length, self.direction);
    }
}

/// A falling seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: SeedKind,
    /// Grids per tick, before the speed multiplier
    pub speed: f32,
    /// Index into the seed animation sequence
    pub anim_index: usize,
    /// Sprite frame currently shown
    pub frame: u32,
    pub last_anim_time: f64,
}

impl Seed {
    pub fn new(id: u32, x: f32, kind: SeedKind, speed: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, 0.0),
            size: Vec2::splat(SEED_SIZE_GRIDS),
            kind,
            speed,
            anim_index: 0,
            frame: SEED_ANIMATION_SEQUENCE[0],
            last_anim_time: 0.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Approximate radius (half-diagonal)
    #[inline]
    pub fn radius(&self) -> f32 {
        (self.size / 2.0).length()
    }
}

/// Score popup emitted on every scored seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingScore {
    pub text: String,
    pub pos: Vec2,
    pub created_at: f64,
}

/// Block dropping into a hole
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingBlock {
    pub x: i32,
    pub y: f32,
    pub target_y: f32,
    pub start_time: f64,
    pub duration: f64,
}

/// A firework particle (not gameplay-affecting)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Grids per tick
    pub vel: Vec2,
    /// Palette index for the renderer
    pub color: u32,
    /// 0-1, decreases over time
    pub life: f32,
    pub size: f32,
}

/// Maximum firework particles alive at once
pub const MAX_PARTICLES: usize = 256;

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub normal: NormalSampler,
    pub phase: GamePhase,

    pub score: u64,
    pub level: u32,
    pub speed_multiplier: f32,
    /// Current base spawn interval (ms)
    pub spawn_interval: f64,
    pub tongue_speed: f32,
    /// ms between player move steps
    pub move_interval: f64,

    /// `None` until the first playing tick schedules the opening spawn
    pub next_spawn_time: Option<f64>,
    pub last_move_time: f64,
    pub last_walk_frame_time: f64,

    pub player: Player,
    pub tongue: Tongue,
    /// Active falling seeds, in spawn order
    pub seeds: Vec<Seed>,
    /// Seeds riding the tongue tip until it is fully retracted
    pub caught_seeds: Vec<Seed>,
    pub floating_scores: Vec<FloatingScore>,
    /// Ground columns with a hole, oldest first
    pub holes: Vec<i32>,
    /// At most one block per column
    pub falling_blocks: BTreeMap<i32, FallingBlock>,
    /// Columns waiting for a falling block
    pub repair_queue: VecDeque<i32>,
    pub fireworks: Vec<Particle>,

    /// Show collision boxes
    pub debug: bool,
    /// Notifications produced by the last tick, in order
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game on the title screen
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            normal: NormalSampler::default(),
            phase: GamePhase::Title,
            score: 0,
            level: INITIAL_LEVEL,
            speed_multiplier: 1.0,
            spawn_interval: tuning.base_spawn_interval,
            tongue_speed: tuning.initial_tongue_speed,
            move_interval: tuning.initial_player_move_interval,
            next_spawn_time: None,
            last_move_time: 0.0,
            last_walk_frame_time: 0.0,
            player: Player::default(),
            tongue: Tongue {
                direction: 1,
                ..Default::default()
            },
            seeds: Vec::new(),
            caught_seeds: Vec::new(),
            floating_scores: Vec::new(),
            holes: Vec::new(),
            falling_blocks: BTreeMap::new(),
            repair_queue: VecDeque::new(),
            fireworks: Vec::new(),
            debug: false,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Return to the title screen with a fresh run.
    ///
    /// The RNG stream and debug flag carry over.
    pub fn reset(&mut self, tuning: &Tuning) {
        let rng = self.rng.clone();
        let normal = self.normal.clone();
        let debug = self.debug;
        let events = std::mem::take(&mut self.events);

        *self = Self::new(self.seed, tuning);
        self.rng = rng;
        self.normal = normal;
        self.debug = debug;
        self.events = events;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Open a hole at `x`; false if one already exists there
    pub fn open_hole(&mut self, x: i32) -> bool {
        if self.holes.contains(&x) {
            return false;
        }
        self.holes.push(x);
        true
    }

    /// Fill the hole at `x`; false if there was none
    pub fn close_hole(&mut self, x: i32) -> bool {
        match self.holes.iter().position(|&hole| hole == x) {
            Some(index) => {
                self.holes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Queue `x` for repair unless it is already queued or its block is falling
    pub fn enqueue_repair(&mut self, x: i32) -> bool {
        if self.repair_queue.contains(&x) || self.falling_blocks.contains_key(&x) {
            return false;
        }
        self.repair_queue.push_back(x);
        true
    }

    /// Add a score popup at `pos`
    pub fn push_floating_score(&mut self, points: u64, pos: Vec2, now: f64) {
        self.floating_scores.push(FloatingScore {
            text: format!("+{points}"),
            pos,
            created_at: now,
        });
    }
}

/// Hole closest to `target_x`.
///
/// Linear scan in the given order; on ties the first hole found wins.
pub fn nearest_hole<'a>(target_x: f32, holes: impl IntoIterator<Item = &'a i32>) -> Option<i32> {
    let mut closest = None;
    let mut min_distance = f32::INFINITY;
    for &x in holes {
        let distance = (target_x - x as f32).abs();
        if distance < min_distance {
            min_distance = distance;
            closest = Some(x);
        }
    }
    closest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let tuning = Tuning::default();
        let state = GameState::new(7, &tuning);
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.level, 1);
        assert_eq!(state.speed_multiplier, 1.0);
        assert_eq!(state.spawn_interval, 2500.0);
        assert_eq!(state.player.pos, Vec2::new(14.5, 20.0));
        assert_eq!(state.player.direction, 1);
        assert!(!state.tongue.is_active());
    }

    #[test]
    fn test_holes_are_unique() {
        let mut state = GameState::new(1, &Tuning::default());
        assert!(state.open_hole(4));
        assert!(!state.open_hole(4));
        assert_eq!(state.holes.len(), 1);
    }

    #[test]
    fn test_enqueue_repair_dedups_queue_and_blocks() {
        let mut state = GameState::new(1, &Tuning::default());
        assert!(state.enqueue_repair(3));
        assert!(!state.enqueue_repair(3));

        state.falling_blocks.insert(
            8,
            FallingBlock {
                x: 8,
                y: 0.0,
                target_y: GROUND_Y_GRIDS,
                start_time: 0.0,
                duration: FALLING_BLOCK_DURATION,
            },
        );
        assert!(!state.enqueue_repair(8));
        assert_eq!(state.repair_queue, [3]);
    }

    #[test]
    fn test_nearest_hole_tie_takes_first() {
        assert_eq!(nearest_hole(15.0, &[10, 14, 16, 25]), Some(14));
        assert_eq!(nearest_hole(15.0, &[16, 14]), Some(16));
        assert_eq!(nearest_hole(24.0, &[10, 14, 16, 25]), Some(25));
        assert_eq!(nearest_hole(0.0, &[] as &[i32]), None);
    }

    #[test]
    fn test_holes_keep_opening_order() {
        let mut state = GameState::new(1, &Tuning::default());
        for x in [16, 14, 20] {
            state.open_hole(x);
        }
        assert_eq!(state.holes, [16, 14, 20]);

        assert!(state.close_hole(14));
        assert!(!state.close_hole(14));
        assert_eq!(state.holes, [16, 20]);
    }

    #[test]
    fn test_reset_keeps_rng_stream_and_debug() {
        let tuning = Tuning::default();
        let mut state = GameState::new(5, &tuning);
        state.debug = true;
        state.score = 4200;
        state.phase = GamePhase::GameOver;
        state.open_hole(3);
        state.enqueue_repair(3);

        state.reset(&tuning);
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.score, 0);
        assert!(state.holes.is_empty());
        assert!(state.repair_queue.is_empty());
        assert!(state.debug);
    }
}
