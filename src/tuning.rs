//! Data-driven game balance
//!
//! Score tiers and difficulty tiers are plain data loaded before play starts.
//! Lookups fall back to zero-effect defaults when nothing matches, so a
//! partially loaded table degrades gameplay instead of failing a tick.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// A per-level delta, evaluated for the level being entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TierCurve {
    /// Same delta for every level in the tier
    Constant { value: f32 },
    /// `scale / (level - start_level + 1)`, shrinking as levels climb
    InverseLevel { scale: f32, start_level: u32 },
}

impl TierCurve {
    pub const ZERO: TierCurve = TierCurve::Constant { value: 0.0 };

    pub const fn constant(value: f32) -> Self {
        TierCurve::Constant { value }
    }

    /// Evaluate the delta for `level`
    pub fn at(&self, level: u32) -> f32 {
        match *self {
            TierCurve::Constant { value } => value,
            TierCurve::InverseLevel { scale, start_level } => {
                let offset = level as f32 - start_level as f32 + 1.0;
                // Below the curve's start there is no sensible value
                if offset <= 0.0 { 0.0 } else { scale / offset }
            }
        }
    }
}

/// One row of the difficulty table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTier {
    /// Highest level this tier applies to; `None` is unbounded
    pub level_cap: Option<u32>,
    pub speed_increase: TierCurve,
    /// ms removed from the spawn interval
    pub spawn_interval_reduction: TierCurve,
    pub tongue_speed_increase: TierCurve,
    /// ms removed from the player move interval
    pub move_interval_reduction: TierCurve,
}

impl DifficultyTier {
    pub fn covers(&self, level: u32) -> bool {
        self.level_cap.is_none_or(|cap| level <= cap)
    }
}

/// Points awarded for a catch above `height_threshold`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTier {
    pub height_threshold: f32,
    pub points: u64,
}

/// Spawn probabilities per seed type; normal takes whatever remains
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedWeights {
    pub repair: f32,
    pub clear: f32,
}

impl Default for SeedWeights {
    fn default() -> Self {
        Self {
            repair: 0.15,
            clear: 0.05,
        }
    }
}

/// Complete balance configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Initial spawn interval (ms)
    pub base_spawn_interval: f64,
    /// Fastest possible spawn interval (ms)
    pub min_spawn_interval: f64,
    /// Spawn jitter as a ratio of the current interval (0.5 = +/- 50%)
    pub spawn_variation_ratio: f64,

    /// Mean seed fall speed (grids/tick)
    pub mean_seed_speed: f32,
    /// Absolute floor for seed speed
    pub min_seed_speed: f32,
    /// Speed band half-width as a ratio of the mean
    pub seed_speed_variation_ratio: f32,

    /// Grids per tick while extending (scaled by the speed multiplier)
    pub initial_tongue_speed: f32,
    /// Grids per tick while retracting (never scaled)
    pub tongue_retract_speed: f32,

    /// ms between player move steps at level 1
    pub initial_player_move_interval: f64,

    /// Points per seed removed by a clear seed
    pub clear_bonus_points: u64,

    pub seed_weights: SeedWeights,

    /// Ascending by height threshold
    pub score_tiers: Vec<ScoreTier>,
    /// Ascending by level cap, unbounded tier last
    pub difficulty_tiers: Vec<DifficultyTier>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_spawn_interval: 2500.0,
            min_spawn_interval: 100.0,
            spawn_variation_ratio: 0.5,
            mean_seed_speed: 0.04,
            min_seed_speed: 0.02,
            seed_speed_variation_ratio: 1.5,
            initial_tongue_speed: 0.5,
            tongue_retract_speed: 3.0,
            initial_player_move_interval: 70.0,
            clear_bonus_points: 100,
            seed_weights: SeedWeights::default(),
            score_tiers: default_score_tiers(),
            difficulty_tiers: default_difficulty_tiers(),
        }
    }
}

fn default_score_tiers() -> Vec<ScoreTier> {
    [
        (4.0, 1000),
        (6.0, 800),
        (8.0, 400),
        (12.0, 200),
        (18.0, 100),
        (999.0, 50),
    ]
    .into_iter()
    .map(|(height_threshold, points)| ScoreTier {
        height_threshold,
        points,
    })
    .collect()
}

fn default_difficulty_tiers() -> Vec<DifficultyTier> {
    use TierCurve::InverseLevel;

    vec![
        // Gentle introduction
        DifficultyTier {
            level_cap: Some(3),
            speed_increase: TierCurve::constant(0.05),
            spawn_interval_reduction: TierCurve::constant(700.0),
            tongue_speed_increase: TierCurve::constant(0.08),
            move_interval_reduction: TierCurve::constant(5.0),
        },
        // Ramp up
        DifficultyTier {
            level_cap: Some(10),
            speed_increase: TierCurve::constant(0.10),
            spawn_interval_reduction: TierCurve::constant(60.0),
            tongue_speed_increase: TierCurve::constant(0.02),
            move_interval_reduction: TierCurve::constant(2.0),
        },
        // Breather
        DifficultyTier {
            level_cap: Some(15),
            speed_increase: TierCurve::constant(0.10),
            spawn_interval_reduction: TierCurve::constant(60.0),
            tongue_speed_increase: TierCurve::ZERO,
            move_interval_reduction: TierCurve::ZERO,
        },
        // Diminishing increments
        DifficultyTier {
            level_cap: Some(30),
            speed_increase: InverseLevel {
                scale: 0.5,
                start_level: 16,
            },
            spawn_interval_reduction: InverseLevel {
                scale: 100.0,
                start_level: 16,
            },
            tongue_speed_increase: TierCurve::ZERO,
            move_interval_reduction: TierCurve::ZERO,
        },
        // Soft cap
        DifficultyTier {
            level_cap: None,
            speed_increase: TierCurve::constant(0.02),
            spawn_interval_reduction: TierCurve::constant(10.0),
            tongue_speed_increase: TierCurve::constant(0.01),
            move_interval_reduction: TierCurve::ZERO,
        },
    ]
}

impl Tuning {
    /// Tuning with no tables loaded: catches score nothing and levels never change
    pub fn unloaded() -> Self {
        Self {
            score_tiers: Vec::new(),
            difficulty_tiers: Vec::new(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json).context("invalid tuning JSON")?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("could not read tuning file {}", path.display()))?;
        let tuning = Self::from_json(&json)
            .with_context(|| format!("could not load tuning from {}", path.display()))?;
        log::info!(
            "Loaded tuning from {} ({} score tiers, {} difficulty tiers)",
            path.display(),
            tuning.score_tiers.len(),
            tuning.difficulty_tiers.len()
        );
        Ok(tuning)
    }

    /// Check table ordering
    pub fn validate(&self) -> Result<()> {
        for pair in self.score_tiers.windows(2) {
            if pair[1].height_threshold <= pair[0].height_threshold {
                bail!(
                    "score tier thresholds must ascend ({} then {})",
                    pair[0].height_threshold,
                    pair[1].height_threshold
                );
            }
        }

        let last = self.difficulty_tiers.len().saturating_sub(1);
        let mut prev_cap = 0;
        for (i, tier) in self.difficulty_tiers.iter().enumerate() {
            match tier.level_cap {
                Some(cap) if cap <= prev_cap && i > 0 => {
                    bail!("difficulty tier caps must ascend ({prev_cap} then {cap})")
                }
                Some(cap) => prev_cap = cap,
                None if i != last => bail!("only the last difficulty tier may be unbounded"),
                None => {}
            }
        }

        if self.min_spawn_interval <= 0.0 {
            bail!("min_spawn_interval must be positive");
        }
        Ok(())
    }

    /// Catches only score once score tiers are present
    pub fn scoring_enabled(&self) -> bool {
        !self.score_tiers.is_empty()
    }

    /// Points for a catch at height `y` (first tier whose threshold exceeds `y`)
    pub fn points_for_height(&self, y: f32) -> u64 {
        self.score_tiers
            .iter()
            .find(|tier| y < tier.height_threshold)
            .map_or(0, |tier| tier.points)
    }

    /// First tier covering `level`
    pub fn tier_for_level(&self, level: u32) -> Option<&DifficultyTier> {
        self.difficulty_tiers.iter().find(|tier| tier.covers(level))
    }
}
