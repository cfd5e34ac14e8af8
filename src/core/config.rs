//! Rules configuration.
//!
//! The house rules of a match are plain data, chosen at startup:
//! - `max_steps`: per-color ply cap after which captures decide the match
//! - `max_undo_count`: how many plies each side may take back
//! - `step_cap_tie_winner`: who wins a tied capture count at the step cap
//!
//! `RulesConfig::default()` gives the standard values.

use serde::{Deserialize, Serialize};

use super::color::PieceColor;

/// Pieces each side starts with.
pub const PIECES_PER_COLOR: usize = 12;

/// House rules for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Plies per color before the step-cap tiebreak applies (default: 20).
    /// The tiebreak only fires once both colors have reached it.
    pub max_steps: u32,

    /// Undos allowed per color over the whole match (default: 3).
    pub max_undo_count: u32,

    /// Winner when both sides have taken the same number of pieces at the
    /// step cap (default: White, offsetting Black's first move).
    pub step_cap_tie_winner: PieceColor,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_steps: 20,
            max_undo_count: 3,
            step_cap_tie_winner: PieceColor::White,
        }
    }
}

impl RulesConfig {
    /// Set the per-color step cap.
    #[must_use]
    pub fn with_max_steps(mut self, steps: u32) -> Self {
        self.max_steps = steps;
        self
    }

    /// Set the per-color undo allowance.
    #[must_use]
    pub fn with_max_undo_count(mut self, count: u32) -> Self {
        self.max_undo_count = count;
        self
    }

    /// Set who wins a tied capture count at the step cap.
    #[must_use]
    pub fn with_step_cap_tie_winner(mut self, color: PieceColor) -> Self {
        self.step_cap_tie_winner = color;
        self
    }
}
