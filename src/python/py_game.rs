//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{ColorMap, GameRng, RulesConfig, Square};
use crate::game::Game;
use crate::strategy::{play_turn, HeuristicStrategy};

use super::py_core::{parse_color, to_py_err, PyMove};

/// Python wrapper for a checkers Game.
#[pyclass(name = "Checkers")]
pub struct PyCheckers {
    game: Game,
    rngs: ColorMap<GameRng>,
}

#[pymethods]
impl PyCheckers {
    /// Create a new match.
    ///
    /// # Arguments
    /// - human_players: 0, 1 (Black) or 2
    /// - seed: RNG seed for the computer players
    /// - max_steps: plies per side before the step cap decides the game
    /// - max_undo_count: undos allowed per side
    #[new]
    #[pyo3(signature = (human_players = 0, seed = 42, max_steps = 20, max_undo_count = 3))]
    fn new(
        human_players: usize,
        seed: u64,
        max_steps: u32,
        max_undo_count: u32,
    ) -> PyResult<Self> {
        let rules = RulesConfig::default()
            .with_max_steps(max_steps)
            .with_max_undo_count(max_undo_count);
        let game = Game::builder()
            .human_players(human_players)
            .rules(rules)
            .build()
            .map_err(to_py_err)?;

        let rng = GameRng::new(seed);
        Ok(Self {
            game,
            rngs: ColorMap::new(|color| rng.for_side(color)),
        })
    }

    /// Legal moves for the side to move.
    fn legal_moves(&self) -> Vec<PyMove> {
        self.game.legal_moves().into_iter().map(PyMove).collect()
    }

    /// Apply a move obtained from `legal_moves`.
    fn perform_move(&mut self, mv: &PyMove) -> PyResult<()> {
        self.game.perform_move(&mv.0).map_err(to_py_err)
    }

    /// Validate and apply a move given in board notation, e.g. ("C3", "D4").
    fn try_move(&mut self, from: &str, to: &str) -> PyResult<PyMove> {
        let from: Square = from.parse().map_err(to_py_err)?;
        let to: Square = to.parse().map_err(to_py_err)?;
        self.game.try_move(from, to).map(PyMove).map_err(to_py_err)
    }

    /// Let the computer play one ply for the side to move.
    fn computer_move(&mut self) -> PyResult<PyMove> {
        let turn = self.game.turn();
        play_turn(&mut self.game, &HeuristicStrategy, &mut self.rngs[turn])
            .map(PyMove)
            .map_err(to_py_err)
    }

    /// Take back the last ply. Returns False once the undo limit is reached.
    fn undo_move(&mut self) -> bool {
        self.game.undo_move()
    }

    /// Number of a color's pieces that have been captured.
    fn taken_count(&self, color: &str) -> PyResult<usize> {
        Ok(self.game.taken_count(parse_color(color)?))
    }

    /// Plies played by a color.
    fn steps(&self, color: &str) -> PyResult<u32> {
        Ok(self.game.steps(parse_color(color)?))
    }

    /// "Black" or "White".
    #[getter]
    fn turn(&self) -> String {
        self.game.turn().to_string()
    }

    /// The winner's color, or None while the game is running.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.game.winner().map(|color| color.to_string())
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Whether the side to move is played by a person.
    #[getter]
    fn is_human_turn(&self) -> bool {
        self.game.current_player().is_human()
    }

    #[getter]
    fn ply_count(&self) -> usize {
        self.game.history_len()
    }

    /// Copy the match, RNG included.
    fn copy(&self) -> Self {
        Self {
            game: self.game.clone(),
            rngs: self.rngs.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = match self.game.winner() {
            Some(winner) => format!("{winner} won"),
            None => "ongoing".to_string(),
        };
        format!(
            "Checkers(plies={}, turn={}, status={})",
            self.game.history_len(),
            self.game.turn(),
            status
        )
    }
}
