//! Legal move generation.
//!
//! Rules enforced here:
//! - Men step and capture along their two forward diagonals only; kings use
//!   all four.
//! - A capture jumps an adjacent opposing piece onto the empty square
//!   directly beyond it.
//! - Forced capture: if any capture exists, only captures are legal.
//! - While an aggressor is set, only its captures are legal.

use log::trace;

use crate::core::{Move, Piece, PieceColor, PieceId, PieceMoves, Square};

use super::pieces::Board;

impl Board {
    /// All legal moves for `color`, in piece-id order.
    ///
    /// Returns only captures if any capture is available. Returns nothing
    /// if another color's piece is mid-chain.
    ///
    /// ```
    /// use rust_checkers::{Board, PieceColor, Square};
    ///
    /// let mut board = Board::empty();
    /// let black = board.place_king(Square::new(2, 2).unwrap(), PieceColor::Black).unwrap();
    /// let white = board.place(Square::new(3, 3).unwrap(), PieceColor::White).unwrap();
    ///
    /// let moves = board.possible_moves(PieceColor::Black);
    /// assert_eq!(moves.len(), 1);
    /// assert_eq!(moves[0].piece(), black);
    /// assert_eq!(moves[0].captured(), Some(white));
    /// ```
    #[must_use]
    pub fn possible_moves(&self, color: PieceColor) -> Vec<Move> {
        let mut moves = Vec::new();

        if let Some(aggressor) = self.aggressor() {
            if aggressor.color() == color {
                moves.extend(self.generate(aggressor).into_iter().filter(Move::is_capture));
            }
            trace!("{color}: {} chain capture(s) for {}", moves.len(), aggressor.id());
            return moves;
        }

        for piece in self.pieces_of(color) {
            moves.extend(self.generate(piece));
        }

        if moves.iter().any(Move::is_capture) {
            moves.retain(Move::is_capture);
        }
        trace!("{color}: {} legal move(s)", moves.len());
        moves
    }

    /// Legal moves for a single piece, ignoring the rest of its side.
    ///
    /// Forced capture still applies within the piece's own moves. Unknown
    /// ids yield no moves.
    #[must_use]
    pub fn piece_moves(&self, id: PieceId) -> PieceMoves {
        let Some(piece) = self.piece(id) else {
            return PieceMoves::new();
        };

        let mut moves = self.generate(piece);
        if moves.iter().any(Move::is_capture) {
            moves.retain(|mv| mv.is_capture());
        }
        moves
    }

    /// Check whether a piece could jump something right now.
    #[must_use]
    pub fn can_capture(&self, id: PieceId) -> bool {
        self.piece(id)
            .is_some_and(|piece| self.generate(piece).iter().any(Move::is_capture))
    }

    /// Resolve a requested `(from, to)` into a legal move for `color`.
    ///
    /// Returns `None` if there is no piece of `color` on `from` or the move
    /// is not legal right now.
    #[must_use]
    pub fn validate_move(&self, color: PieceColor, from: Square, to: Square) -> Option<Move> {
        let piece = self.piece_at(from)?;
        if piece.color() != color {
            return None;
        }

        self.possible_moves(color)
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to)
    }

    /// Distinct pieces that have at least one legal move, in id order.
    #[must_use]
    pub fn movable_pieces(&self, color: PieceColor) -> Vec<PieceId> {
        let mut ids: Vec<PieceId> = self.possible_moves(color).iter().map(Move::piece).collect();
        ids.dedup();
        ids
    }

    /// Raw candidates for one piece, before any forced-capture filtering.
    fn generate(&self, piece: &Piece) -> PieceMoves {
        let mut moves = PieceMoves::new();
        let from = piece.square();

        for (dx, dy) in piece.directions() {
            let Some(target) = from.offset(dx, dy) else {
                continue;
            };

            match self.piece_at(target) {
                None => moves.push(Move::step(piece.id(), from, target)),
                Some(other) if other.color() != piece.color() => {
                    if let Some(landing) = from.offset(2 * dx, 2 * dy) {
                        if self.is_vacant(landing) {
                            moves.push(Move::capture(piece.id(), from, landing, other.id()));
                        }
                    }
                }
                Some(_) => {}
            }
        }

        moves
    }
}
