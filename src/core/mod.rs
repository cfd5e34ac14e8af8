//! Core engine types: colors, squares, pieces, moves, RNG, configuration, errors.
//!
//! These are the building blocks the board and game are made of. None of
//! them know about move generation or turn order.

pub mod color;
pub mod square;
pub mod piece;
pub mod moves;
pub mod rng;
pub mod config;
pub mod error;

pub use color::{ColorMap, PieceColor};
pub use square::{Square, BOARD_SIZE};
pub use piece::{Piece, PieceId};
pub use moves::{HistoryEntry, Move, PieceMoves};
pub use rng::{GameRng, GameRngState};
pub use config::{RulesConfig, PIECES_PER_COLOR};
pub use error::GameError;
