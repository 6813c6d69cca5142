//! Intent flags written by input handlers between ticks

use serde::{Deserialize, Serialize};

/// One-shot tongue command; a later write replaces an earlier one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TongueCommand {
    Extend,
    Retract,
}

/// Input state sampled at the start of each tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Left direction held
    pub left: bool,
    /// Right direction held (wins over left)
    pub right: bool,
    /// Pending tongue command, consumed by the next tick
    pub tongue: Option<TongueCommand>,
}
