//! Computer players.
//!
//! A [`MoveStrategy`] picks a move from a position. [`play_turn`] and
//! [`play_out`] feed its choices into a [`Game`](crate::Game).

mod driver;
mod policy;

pub use driver::{play_out, play_turn};
pub use policy::{choose_move, HeuristicStrategy, MoveStrategy, RandomStrategy};
