//! Side-effect notifications for audio/fx layers
//!
//! The simulation never plays sounds itself; it records what happened during
//! a tick and frontends drain the list after `update`.

use serde::{Deserialize, Serialize};

use super::state::SeedKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Tongue started extending
    TongueExtended,
    /// A seed was caught by the tongue tip
    Catch { kind: SeedKind, points: u64 },
    /// A clear seed removed `cleared` seeds for `points` in total
    ClearBonus { cleared: u32, points: u64 },
    /// Walk animation advanced a frame
    Step,
    /// A seed hit the ground and opened a new hole
    HoleOpened { x: i32 },
    /// A falling block landed and closed a hole
    HoleRepaired { x: i32 },
    LevelUp { level: u32 },
    /// Player was hit by a seed
    PlayerStruck,
    GameOver,
}
