//! Distance queries used by computer players.
//!
//! Distances are Chebyshev (king-move) distances. None of this affects
//! legality.

use crate::core::{Move, PieceColor, PieceId, Square};

use super::pieces::Board;

impl Board {
    /// The own/rival pair of pieces closest to each other.
    ///
    /// Ties keep the first pair found in id order. Returns `None` when
    /// either side has no pieces.
    #[must_use]
    pub fn closest_rival_pieces(&self, color: PieceColor) -> Option<(PieceId, PieceId)> {
        let mut best: Option<(u8, PieceId, PieceId)> = None;

        for own in self.pieces_of(color) {
            for rival in self.pieces_of(color.opponent()) {
                let distance = own.square().distance(rival.square());
                if best.map_or(true, |(d, _, _)| distance < d) {
                    best = Some((distance, own.id(), rival.id()));
                }
            }
        }

        best.map(|(_, own, rival)| (own, rival))
    }

    /// Check whether a move brings its piece strictly closer to `target`.
    #[must_use]
    pub fn is_towards(mv: &Move, target: Square) -> bool {
        mv.to().distance(target) < mv.from().distance(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: u8, y: u8) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn test_closest_rival_pieces() {
        let mut board = Board::empty();
        let far = board.place_king(sq(0, 0), PieceColor::Black).unwrap();
        let near = board.place_king(sq(5, 3), PieceColor::Black).unwrap();
        board.place_king(sq(0, 7), PieceColor::White).unwrap();
        let rival = board.place_king(sq(7, 5), PieceColor::White).unwrap();

        assert_eq!(board.closest_rival_pieces(PieceColor::Black), Some((near, rival)));
        assert_eq!(board.closest_rival_pieces(PieceColor::White), Some((rival, near)));
        assert_ne!(far, near);
    }

    #[test]
    fn test_closest_rival_ties_keep_first() {
        let mut board = Board::empty();
        let first = board.place_king(sq(1, 1), PieceColor::Black).unwrap();
        board.place_king(sq(5, 1), PieceColor::Black).unwrap();
        let rival = board.place_king(sq(3, 1), PieceColor::White).unwrap();

        assert_eq!(board.closest_rival_pieces(PieceColor::Black), Some((first, rival)));
    }

    #[test]
    fn test_closest_rival_pieces_needs_both_sides() {
        let mut board = Board::empty();
        board.place(sq(1, 1), PieceColor::Black).unwrap();

        assert_eq!(board.closest_rival_pieces(PieceColor::Black), None);
        assert_eq!(board.closest_rival_pieces(PieceColor::White), None);
    }

    #[test]
    fn test_is_towards() {
        let mut board = Board::empty();
        board.place_king(sq(2, 2), PieceColor::Black).unwrap();

        let moves = board.possible_moves(PieceColor::Black);
        let target = sq(6, 6);

        let toward: Vec<_> = moves.iter().filter(|mv| Board::is_towards(mv, target)).collect();
        assert_eq!(toward.len(), 1);
        assert_eq!(toward[0].to(), sq(3, 3));
    }

    #[test]
    fn test_is_towards_uses_king_distance() {
        let mut board = Board::empty();
        board.place_king(sq(2, 2), PieceColor::Black).unwrap();
        let moves = board.possible_moves(PieceColor::Black);

        // Any move that closes the column gap counts, even if it leaves the row
        let sideways = moves.iter().find(|mv| mv.to() == sq(3, 1)).unwrap();
        assert!(Board::is_towards(sideways, sq(6, 2)));
        let back = moves.iter().find(|mv| mv.to() == sq(1, 1)).unwrap();
        assert!(!Board::is_towards(back, sq(6, 2)));
        let up = moves.iter().find(|mv| mv.to() == sq(1, 3)).unwrap();
        assert!(!Board::is_towards(up, sq(6, 2)));
    }
}
