//! Errors returned by the engine.

use thiserror::Error;

use super::color::PieceColor;
use super::piece::PieceId;
use super::square::Square;

/// Everything that can go wrong when setting up or driving a match.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("human player count must be 0, 1 or 2, got {0}")]
    InvalidHumanPlayerCount(usize),

    #[error("square ({x}, {y}) is off the board")]
    OutOfBounds { x: i16, y: i16 },

    #[error("invalid square notation {0:?}")]
    InvalidNotation(String),

    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    #[error("{0} already has the maximum number of pieces")]
    TooManyPieces(PieceColor),

    #[error("piece {0} is not on the board")]
    UnknownPiece(PieceId),

    #[error("move expects {piece} on {expected} but it is on {actual}")]
    StaleMove {
        piece: PieceId,
        expected: Square,
        actual: Square,
    },

    #[error("{piece} cannot land on {square}, it is occupied")]
    DestinationOccupied { piece: PieceId, square: Square },

    #[error("{from} to {to} is not a legal move for {color}")]
    IllegalMove {
        color: PieceColor,
        from: Square,
        to: Square,
    },

    #[error("{0} has no legal moves")]
    NoLegalMoves(PieceColor),

    #[error("the game is over, {0} won")]
    GameOver(PieceColor),
}
