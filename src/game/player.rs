//! Match participants.

use serde::{Deserialize, Serialize};

use crate::core::PieceColor;

/// One side of a match, driven either by a person or by a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    human: bool,
    color: PieceColor,
}

impl Player {
    #[must_use]
    pub const fn new(human: bool, color: PieceColor) -> Self {
        Self { human, color }
    }

    #[must_use]
    pub const fn is_human(self) -> bool {
        self.human
    }

    #[must_use]
    pub const fn color(self) -> PieceColor {
        self.color
    }

    /// Seat the two players for a match with `human_count` people.
    ///
    /// One person plays Black against the computer; two play both sides.
    pub(crate) fn seat(human_count: usize) -> [Player; 2] {
        [
            Player::new(human_count >= 1, PieceColor::Black),
            Player::new(human_count >= 2, PieceColor::White),
        ]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.human { "human" } else { "computer" };
        write!(f, "{} ({kind})", self.color)
    }
}
