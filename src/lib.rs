//! # rust-checkers
//!
//! A checkers (English draughts) rules engine for games between people and
//! computer players.
//!
//! ## Rules
//!
//! 1. **Forced capture**: if any capture is available, only captures are legal.
//!
//! 2. **Multi-jump**: after a capture the same piece keeps jumping while it
//!    can. Until the chain ends it is the board's *aggressor* and the only
//!    piece allowed to move.
//!
//! 3. **Step cap**: once both sides have played `max_steps` plies, the side
//!    that has taken more pieces wins. A tie goes to White by default.
//!
//! 4. **Bounded undo**: each side may take back up to `max_undo_count` plies.
//!
//! ## Modules
//!
//! - `core`: colors, squares, pieces, moves, RNG, configuration, errors
//! - `board`: piece placement and move generation
//! - `game`: turn order, history, undo and win detection
//! - `strategy`: computer players
//!
//! ## Example
//!
//! ```
//! use rust_checkers::{Game, GameRng, HeuristicStrategy, play_out};
//!
//! let mut game = Game::new(0).unwrap();
//! let mut rng = GameRng::new(42);
//!
//! let winner = play_out(&mut game, &HeuristicStrategy, &mut rng, 500).unwrap();
//! assert!(winner.is_some());
//! ```

pub mod core;
pub mod board;
pub mod game;
pub mod strategy;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    ColorMap, PieceColor,
    Square, BOARD_SIZE,
    Piece, PieceId,
    Move, HistoryEntry, PieceMoves,
    GameRng, GameRngState,
    RulesConfig, PIECES_PER_COLOR,
    GameError,
};

pub use crate::board::Board;

pub use crate::game::{Game, GameBuilder, Player};

pub use crate::strategy::{
    choose_move, play_out, play_turn,
    HeuristicStrategy, MoveStrategy, RandomStrategy,
};
