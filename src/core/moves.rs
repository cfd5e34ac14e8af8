//! Move representation and history records.
//!
//! A `Move` is a single ply: one piece goes from one square to another,
//! optionally jumping an opposing piece. Moves are immutable values. The
//! origin square is fixed when the move is generated, so a move built
//! before its piece moved elsewhere is detected as stale instead of being
//! applied from the wrong square.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::PieceColor;
use super::piece::{Piece, PieceId};
use super::square::Square;

/// Moves generated for a single piece. Never more than four.
pub type PieceMoves = SmallVec<[Move; 4]>;

/// One ply.
///
/// ## Example
///
/// ```
/// use rust_checkers::{Board, PieceColor};
///
/// let board = Board::new();
/// let moves = board.possible_moves(PieceColor::Black);
/// let mv = &moves[0];
///
/// assert!(!mv.is_capture());
/// assert_eq!(board.piece(mv.piece()).unwrap().square(), mv.from());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    piece: PieceId,
    from: Square,
    to: Square,
    captured: Option<PieceId>,
}

impl Move {
    pub(crate) fn step(piece: PieceId, from: Square, to: Square) -> Self {
        Self {
            piece,
            from,
            to,
            captured: None,
        }
    }

    pub(crate) fn capture(piece: PieceId, from: Square, to: Square, captured: PieceId) -> Self {
        Self {
            piece,
            from,
            to,
            captured: Some(captured),
        }
    }

    /// The piece being moved.
    #[must_use]
    pub fn piece(&self) -> PieceId {
        self.piece
    }

    /// Where the piece stood when the move was generated.
    #[must_use]
    pub fn from(&self) -> Square {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Square {
        self.to
    }

    /// The piece being jumped, if any.
    #[must_use]
    pub fn captured(&self) -> Option<PieceId> {
        self.captured
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// The square jumped over by a capture.
    #[must_use]
    pub fn jumped_square(&self) -> Option<Square> {
        if !self.is_capture() {
            return None;
        }
        let dx = (self.to.x() as i8 - self.from.x() as i8) / 2;
        let dy = (self.to.y() as i8 - self.from.y() as i8) / 2;
        self.from.offset(dx, dy)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// An applied move together with everything needed to take it back.
///
/// Used for:
/// - Undo (one ply at a time)
/// - Replay/debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    mv: Move,
    mover: PieceColor,
    captured: Option<Piece>,
    prior_turn: PieceColor,
    prior_aggressor: Option<PieceId>,
}

impl HistoryEntry {
    pub(crate) fn new(
        mv: Move,
        mover: PieceColor,
        captured: Option<Piece>,
        prior_turn: PieceColor,
        prior_aggressor: Option<PieceId>,
    ) -> Self {
        Self {
            mv,
            mover,
            captured,
            prior_turn,
            prior_aggressor,
        }
    }

    /// The move as applied, with the mover's pre-move square as `from`.
    #[must_use]
    pub fn mv(&self) -> &Move {
        &self.mv
    }

    /// Color of the piece that moved.
    #[must_use]
    pub fn mover(&self) -> PieceColor {
        self.mover
    }

    /// Snapshot of the jumped piece as it was when removed.
    #[must_use]
    pub fn captured(&self) -> Option<&Piece> {
        self.captured.as_ref()
    }

    #[must_use]
    pub fn prior_turn(&self) -> PieceColor {
        self.prior_turn
    }

    #[must_use]
    pub fn prior_aggressor(&self) -> Option<PieceId> {
        self.prior_aggressor
    }
}
