//! Match orchestration: turn order, history, undo and win detection.
//!
//! A `Game` owns one `Board` and two `Player`s. Callers pick a move (from a
//! person or a `MoveStrategy`) and hand it to `Game::perform_move`, the only
//! operation that advances a match.

mod builder;
mod engine;
mod player;

pub use builder::GameBuilder;
pub use engine::Game;
pub use player::Player;
