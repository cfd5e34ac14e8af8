//! The board: live pieces, move generation and distance queries.
//!
//! `Board` owns every piece. Rules that only need the position (what can
//! move where, what must capture) live here; turn order, history and win
//! detection live in `game`.

mod movegen;
mod pieces;
mod proximity;

pub use pieces::Board;
