//! Letting a strategy play turns of a `Game`.

use log::trace;

use crate::core::{GameError, GameRng, Move, PieceColor};
use crate::game::Game;

use super::policy::MoveStrategy;

/// Let `strategy` play one ply for the side to move.
///
/// Inside a capture chain the same side moves again afterwards; call this
/// again to continue the chain.
pub fn play_turn<S: MoveStrategy + ?Sized>(
    game: &mut Game,
    strategy: &S,
    rng: &mut GameRng,
) -> Result<Move, GameError> {
    if let Some(winner) = game.winner() {
        return Err(GameError::GameOver(winner));
    }

    let color = game.turn();
    let mv = strategy
        .choose_move(game.board(), color, rng)
        .ok_or(GameError::NoLegalMoves(color))?;
    trace!("{color} plays {mv}");

    game.perform_move(&mv)?;
    Ok(mv)
}

/// Let `strategy` play both sides until the game ends or `max_plies` plies
/// have been played. Returns the winner, if any.
pub fn play_out<S: MoveStrategy + ?Sized>(
    game: &mut Game,
    strategy: &S,
    rng: &mut GameRng,
    max_plies: usize,
) -> Result<Option<PieceColor>, GameError> {
    for _ in 0..max_plies {
        if game.is_over() {
            break;
        }
        play_turn(game, strategy, rng)?;
    }
    Ok(game.winner())
}
