//! Pieces and their identifiers.
//!
//! Every piece on a board has a unique `PieceId`, allocated by the board
//! when the piece is placed. Ids stay valid for the life of the board, so
//! a captured piece keeps its id while it sits in the undo history and gets
//! it back when the capture is undone.
//!
//! A `Piece` is owned by its board. Callers only ever see `&Piece`; the
//! position and promotion setters are crate-internal.

use serde::{Deserialize, Serialize};

use super::color::PieceColor;
use super::square::Square;

/// Unique identifier for a piece on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PieceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A man or king on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    square: Square,
    color: PieceColor,
    promoted: bool,
}

impl Piece {
    pub(crate) fn new(id: PieceId, square: Square, color: PieceColor, promoted: bool) -> Self {
        Self {
            id,
            square,
            color,
            promoted,
        }
    }

    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[must_use]
    pub fn square(&self) -> Square {
        self.square
    }

    #[must_use]
    pub fn x(&self) -> u8 {
        self.square.x()
    }

    #[must_use]
    pub fn y(&self) -> u8 {
        self.square.y()
    }

    #[must_use]
    pub fn color(&self) -> PieceColor {
        self.color
    }

    /// Kings may move and capture in all four diagonal directions.
    #[must_use]
    pub fn is_promoted(&self) -> bool {
        self.promoted
    }

    /// Diagonal directions this piece may use, in generation order.
    pub fn directions(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
        DIAGONALS
            .into_iter()
            .filter(move |&(_, dy)| self.promoted || dy == self.color.forward())
    }

    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    /// Crown the piece if it stands on its promotion row.
    ///
    /// Returns true if this call promoted it. Never demotes.
    pub(crate) fn promote_if_on_last_row(&mut self) -> bool {
        if !self.promoted && self.square.y() == self.color.promotion_row() {
            self.promoted = true;
            return true;
        }
        false
    }
}
