//! Match construction.

use crate::board::Board;
use crate::core::{GameError, PieceColor, RulesConfig};

use super::engine::Game;
use super::player::Player;

/// Builder for creating a Game.
///
/// ```
/// use rust_checkers::{GameBuilder, PieceColor, RulesConfig};
///
/// let game = GameBuilder::new()
///     .human_players(1)
///     .rules(RulesConfig::default().with_max_steps(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(game.turn(), PieceColor::Black);
/// assert!(game.player(PieceColor::Black).is_human());
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    human_players: usize,
    rules: RulesConfig,
    board: Option<Board>,
    first_turn: PieceColor,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            human_players: 0,
            rules: RulesConfig::default(),
            board: None,
            first_turn: PieceColor::Black,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of human players: 0, 1 (Black) or 2. Checked by `build`.
    pub fn human_players(mut self, count: usize) -> Self {
        self.human_players = count;
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Start from a custom position instead of the standard setup.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Side to move first (default: Black).
    pub fn first_turn(mut self, color: PieceColor) -> Self {
        self.first_turn = color;
        self
    }

    /// Build the game.
    ///
    /// Fails with `GameError::InvalidHumanPlayerCount` outside `0..=2`.
    pub fn build(self) -> Result<Game, GameError> {
        if self.human_players > 2 {
            return Err(GameError::InvalidHumanPlayerCount(self.human_players));
        }

        Ok(Game::from_parts(
            self.board.unwrap_or_default(),
            Player::seat(self.human_players),
            self.first_turn,
            self.rules,
        ))
    }
}
