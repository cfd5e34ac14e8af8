//! Move selection policies for computer players.
//!
//! Policies are trait-based so they can be swapped without touching move
//! generation:
//! - `HeuristicStrategy`: captures first, then king endgame chasing, else random
//! - `RandomStrategy`: uniform over legal moves

use crate::board::Board;
use crate::core::{GameRng, Move, Piece, PieceColor};

/// Policy for picking a move from a position.
pub trait MoveStrategy: Send + Sync {
    /// Pick one of `color`'s legal moves, or `None` if it has none.
    ///
    /// Must only return moves from [`Board::possible_moves`].
    fn choose_move(&self, board: &Board, color: PieceColor, rng: &mut GameRng) -> Option<Move>;
}

/// The classic computer opponent.
///
/// 1. If any capture is available, play a random capture.
/// 2. If every own piece is a king, move the piece closest to the enemy
///    towards its closest rival, when such a move exists.
/// 3. Otherwise play a random legal move.
#[derive(Clone, Debug, Default)]
pub struct HeuristicStrategy;

impl MoveStrategy for HeuristicStrategy {
    fn choose_move(&self, board: &Board, color: PieceColor, rng: &mut GameRng) -> Option<Move> {
        let moves = board.possible_moves(color);

        let captures: Vec<&Move> = moves.iter().filter(|mv| mv.is_capture()).collect();
        if let Some(capture) = rng.choose(&captures) {
            return Some((*capture).clone());
        }

        if board.pieces_of(color).all(Piece::is_promoted) {
            if let Some(mv) = chase_move(board, color, &moves) {
                return Some(mv.clone());
            }
        }

        rng.choose(&moves).cloned()
    }
}

/// First move of the closest own piece that heads for its closest rival.
fn chase_move<'a>(board: &Board, color: PieceColor, moves: &'a [Move]) -> Option<&'a Move> {
    let (own, rival) = board.closest_rival_pieces(color)?;
    let target = board.piece(rival)?.square();

    moves
        .iter()
        .find(|mv| mv.piece() == own && Board::is_towards(mv, target))
}

/// Uniformly random legal moves.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    fn choose_move(&self, board: &Board, color: PieceColor, rng: &mut GameRng) -> Option<Move> {
        rng.choose(&board.possible_moves(color)).cloned()
    }
}

/// Pick a move with the default computer heuristic.
pub fn choose_move(board: &Board, color: PieceColor, rng: &mut GameRng) -> Option<Move> {
    HeuristicStrategy.choose_move(board, color, rng)
}
