//! Python bindings for the rust-checkers engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_checkers as ck
//!
//! game = ck.Checkers(human_players=1, seed=42)
//! game.try_move("C3", "D4")
//! reply = game.computer_move()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// rust-checkers: an English draughts rules engine.
#[pymodule]
fn rust_checkers(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMove>()?;
    m.add_class::<PyCheckers>()?;

    Ok(())
}
