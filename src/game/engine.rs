//! Turn engine: applying and taking back moves, step counts, win detection.

use std::cmp::Ordering;

use log::{debug, warn};

use crate::board::Board;
use crate::core::{
    ColorMap, GameError, HistoryEntry, Move, PieceColor, RulesConfig, Square, PIECES_PER_COLOR,
};

use super::builder::GameBuilder;
use super::player::Player;

/// A checkers match.
///
/// `Game` is the only thing that mutates a match. Every ply goes through
/// [`Game::perform_move`], which records an undo entry, updates the step
/// counters, resolves capture chains and re-evaluates the winner.
///
/// ## Example
///
/// ```
/// use rust_checkers::{Game, PieceColor, Square};
///
/// let mut game = Game::new(2).unwrap();
/// let from: Square = "C3".parse().unwrap();
/// let to: Square = "D4".parse().unwrap();
///
/// let mv = game.board().validate_move(PieceColor::Black, from, to).unwrap();
/// game.perform_move(&mv).unwrap();
///
/// assert_eq!(game.turn(), PieceColor::White);
/// assert_eq!(game.steps(PieceColor::Black), 1);
///
/// assert!(game.undo_move());
/// assert_eq!(game.turn(), PieceColor::Black);
/// assert_eq!(game.board().piece_at(from).unwrap().color(), PieceColor::Black);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: PieceColor,
    winner: Option<PieceColor>,
    history: Vec<HistoryEntry>,
    steps: ColorMap<u32>,
    undo_counts: ColorMap<u32>,
    players: [Player; 2],
    rules: RulesConfig,
}

impl Game {
    /// Start a standard match with 0, 1 or 2 human players.
    ///
    /// With one human, the human plays Black.
    pub fn new(human_player_count: usize) -> Result<Self, GameError> {
        GameBuilder::new().human_players(human_player_count).build()
    }

    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub(crate) fn from_parts(
        board: Board,
        players: [Player; 2],
        first_turn: PieceColor,
        rules: RulesConfig,
    ) -> Self {
        Self {
            board,
            turn: first_turn,
            winner: None,
            history: Vec::new(),
            steps: ColorMap::with_value(0),
            undo_counts: ColorMap::with_value(0),
            players,
            rules,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color to move.
    #[must_use]
    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    /// The winner, once decided. Never changes after that.
    #[must_use]
    pub fn winner(&self) -> Option<PieceColor> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Plies played by a color, net of undos.
    #[must_use]
    pub fn steps(&self, color: PieceColor) -> u32 {
        self.steps[color]
    }

    /// Undos used by a color.
    #[must_use]
    pub fn undo_count(&self, color: PieceColor) -> u32 {
        self.undo_counts[color]
    }

    /// Applied plies, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(HistoryEntry::mv)
    }

    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, color: PieceColor) -> Player {
        self.players[color.index()]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.player(self.turn)
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.possible_moves(self.turn)
    }

    /// Number of `color`'s pieces that have been captured.
    #[must_use]
    pub fn taken_count(&self, color: PieceColor) -> usize {
        PIECES_PER_COLOR.saturating_sub(self.board.count(color))
    }

    // === Moves ===

    /// Apply a move.
    ///
    /// The move is not checked for legality; get it from
    /// [`Board::possible_moves`] or [`Board::validate_move`]. It is checked
    /// for being applicable: the game must not be over, both pieces it names
    /// must be on the board, the mover must still stand on `from`, `to`
    /// must be empty and a captured piece must be a rival standing on the
    /// jumped square. Nothing is mutated when a check fails.
    pub fn perform_move(&mut self, mv: &Move) -> Result<(), GameError> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameOver(winner));
        }

        let piece = self
            .board
            .piece(mv.piece())
            .ok_or(GameError::UnknownPiece(mv.piece()))?;
        if piece.square() != mv.from() {
            return Err(GameError::StaleMove {
                piece: piece.id(),
                expected: mv.from(),
                actual: piece.square(),
            });
        }
        let mover = piece.color();

        if !self.board.is_vacant(mv.to()) {
            return Err(GameError::DestinationOccupied {
                piece: mv.piece(),
                square: mv.to(),
            });
        }

        let captured = mv
            .captured()
            .map(|id| self.board.piece(id).cloned().ok_or(GameError::UnknownPiece(id)))
            .transpose()?;
        if let (Some(victim), Some(jumped)) = (&captured, mv.jumped_square()) {
            if victim.square() != jumped || victim.color() == mover {
                return Err(GameError::StaleMove {
                    piece: victim.id(),
                    expected: jumped,
                    actual: victim.square(),
                });
            }
        }

        self.history.push(HistoryEntry::new(
            mv.clone(),
            mover,
            captured,
            self.turn,
            self.board.aggressor_id(),
        ));
        self.steps[mover] += 1;

        if self.board.relocate(mv.piece(), mv.to())? {
            debug!("{} crowned on {}", mv.piece(), mv.to());
        }
        if let Some(id) = mv.captured() {
            self.board.remove_piece(id);
        }

        if mv.is_capture() && self.board.can_capture(mv.piece()) {
            debug!("{mover} {mv}, capture chain continues");
            self.board.set_aggressor(Some(mv.piece()));
            self.turn = mover;
        } else {
            debug!("{mover} {mv}");
            self.board.set_aggressor(None);
            self.turn = mover.opponent();
        }

        self.check_for_winner();
        Ok(())
    }

    /// Validate `(from, to)` for the side to move and apply it.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<Move, GameError> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameOver(winner));
        }

        let mv = self
            .board
            .validate_move(self.turn, from, to)
            .ok_or(GameError::IllegalMove {
                color: self.turn,
                from,
                to,
            })?;
        self.perform_move(&mv)?;
        Ok(mv)
    }

    /// Take back the most recent ply.
    ///
    /// The undo is charged to the color that made the ply. Does nothing and
    /// returns false if there is no history, or if either the side to move
    /// or the side being charged has used up its undos.
    ///
    /// Undo is one ply at a time: inside a capture chain it steps back a
    /// single jump and reopens the chain. Promotions are not reverted and a
    /// decided winner stays decided.
    pub fn undo_move(&mut self) -> bool {
        let Some(last) = self.history.last() else {
            return false;
        };
        let limit = self.rules.max_undo_count;
        if self.undo_counts[self.turn] >= limit || self.undo_counts[last.mover()] >= limit {
            return false;
        }
        if !self.can_take_back(last) {
            warn!("cannot take back {}: the board no longer matches it", last.mv());
            return false;
        }
        let Some(entry) = self.history.pop() else {
            return false;
        };

        let mv = entry.mv();
        let mover = entry.mover();
        self.steps[mover] = self.steps[mover].saturating_sub(1);
        self.undo_counts[mover] += 1;

        let moved_back = self.board.shift(mv.piece(), mv.from());
        debug_assert!(moved_back.is_ok(), "undo of {mv} failed: {moved_back:?}");
        if let Some(captured) = entry.captured() {
            self.board.restore_piece(captured.clone());
        }

        self.turn = mover;
        self.board.set_aggressor(entry.prior_aggressor());
        debug!(
            "{mover} took back {mv} ({} of {} undos)",
            self.undo_counts[mover], self.rules.max_undo_count
        );
        true
    }

    /// Check that the mover is on `to` and both `from` and the captured
    /// piece's square are free again.
    fn can_take_back(&self, entry: &HistoryEntry) -> bool {
        let mv = entry.mv();
        let mover_in_place = self
            .board
            .piece(mv.piece())
            .is_some_and(|piece| piece.square() == mv.to());
        let captured_square_free = entry
            .captured()
            .map_or(true, |victim| self.board.is_vacant(victim.square()));

        mover_in_place && self.board.is_vacant(mv.from()) && captured_square_free
    }

    // === Win detection ===

    /// Decide the winner if the match is over.
    ///
    /// In order: a side with no pieces loses; the side to move with no
    /// legal moves loses; once both sides reach the step cap, whoever has
    /// taken more pieces wins, a tie going to `RulesConfig::step_cap_tie_winner`.
    /// Once set, the winner never changes.
    pub fn check_for_winner(&mut self) -> Option<PieceColor> {
        if self.winner.is_none() {
            self.winner = self.decide_winner();
            if let Some(winner) = self.winner {
                debug!(
                    "{winner} wins after {} plies (taken: Black {}, White {})",
                    self.history.len(),
                    self.taken_count(PieceColor::White),
                    self.taken_count(PieceColor::Black),
                );
            }
        }
        self.winner
    }

    fn decide_winner(&self) -> Option<PieceColor> {
        // With both sides empty Black wins: White's absence is checked first
        if self.board.count(PieceColor::White) == 0 {
            return Some(PieceColor::Black);
        }
        if self.board.count(PieceColor::Black) == 0 {
            return Some(PieceColor::White);
        }

        if self.board.possible_moves(self.turn).is_empty() {
            return Some(self.turn.opponent());
        }

        let cap = self.rules.max_steps;
        if self.steps.iter().all(|(_, &steps)| steps >= cap) {
            let taken_by_black = self.taken_count(PieceColor::White);
            let taken_by_white = self.taken_count(PieceColor::Black);
            return Some(match taken_by_black.cmp(&taken_by_white) {
                Ordering::Greater => PieceColor::Black,
                Ordering::Less => PieceColor::White,
                Ordering::Equal => self.rules.step_cap_tie_winner,
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceId;

    fn sq(x: u8, y: u8) -> Square {
        Square::new(x, y).unwrap()
    }

    fn game_with(board: Board) -> Game {
        Game::builder().board(board).build().unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(1).unwrap();

        assert_eq!(game.turn(), PieceColor::Black);
        assert_eq!(game.winner(), None);
        assert_eq!(game.history_len(), 0);
        assert_eq!(game.steps(PieceColor::Black), 0);
        assert_eq!(game.undo_count(PieceColor::White), 0);
        assert!(game.current_player().is_human());
        assert!(!game.player(PieceColor::White).is_human());
    }

    #[test]
    fn test_invalid_human_count() {
        assert_eq!(Game::new(3).err(), Some(GameError::InvalidHumanPlayerCount(3)));
    }

    #[test]
    fn test_simple_move_flips_turn() {
        let mut game = Game::new(0).unwrap();
        let mv = game.legal_moves()[0].clone();

        game.perform_move(&mv).unwrap();

        assert_eq!(game.turn(), PieceColor::White);
        assert_eq!(game.steps(PieceColor::Black), 1);
        assert_eq!(game.last_move(), Some(&mv));
        assert_eq!(game.board().piece(mv.piece()).unwrap().square(), mv.to());
    }

    #[test]
    fn test_capture_removes_piece() {
        let mut board = Board::empty();
        board.place(sq(2, 2), PieceColor::Black).unwrap();
        let victim = board.place(sq(3, 3), PieceColor::White).unwrap();
        board.place(sq(7, 7), PieceColor::White).unwrap();
        let mut game = game_with(board);

        let mv = game.try_move(sq(2, 2), sq(4, 4)).unwrap();

        assert_eq!(mv.captured(), Some(victim));
        assert!(game.board().piece(victim).is_none());
        assert_eq!(game.taken_count(PieceColor::White), 11);
        assert_eq!(game.turn(), PieceColor::White);
    }

    #[test]
    fn test_chain_capture_keeps_turn() {
        let mut board = Board::empty();
        let chaser = board.place(sq(0, 0), PieceColor::Black).unwrap();
        board.place(sq(1, 1), PieceColor::White).unwrap();
        board.place(sq(3, 3), PieceColor::White).unwrap();
        board.place(sq(7, 7), PieceColor::White).unwrap();
        let mut game = game_with(board);

        game.try_move(sq(0, 0), sq(2, 2)).unwrap();
        assert_eq!(game.turn(), PieceColor::Black);
        assert_eq!(game.board().aggressor_id(), Some(chaser));

        game.try_move(sq(2, 2), sq(4, 4)).unwrap();
        assert_eq!(game.turn(), PieceColor::White);
        assert_eq!(game.board().aggressor_id(), None);
        assert_eq!(game.steps(PieceColor::Black), 2);
    }

    #[test]
    fn test_simple_move_never_opens_chain() {
        let mut board = Board::empty();
        board.place(sq(2, 2), PieceColor::Black).unwrap();
        board.place(sq(4, 4), PieceColor::White).unwrap();
        let mut game = game_with(board);

        // After stepping to (3,3) Black could jump (4,4), but only captures chain
        game.try_move(sq(2, 2), sq(3, 3)).unwrap();
        assert_eq!(game.turn(), PieceColor::White);
        assert!(game.board().aggressor().is_none());
    }

    #[test]
    fn test_promotion() {
        let mut board = Board::empty();
        let runner = board.place(sq(1, 6), PieceColor::Black).unwrap();
        board.place(sq(7, 7), PieceColor::White).unwrap();
        let mut game = game_with(board);

        game.try_move(sq(1, 6), sq(2, 7)).unwrap();
        assert!(game.board().piece(runner).unwrap().is_promoted());

        // Taking the move back keeps the crown
        assert!(game.undo_move());
        let piece = game.board().piece(runner).unwrap();
        assert_eq!(piece.square(), sq(1, 6));
        assert!(piece.is_promoted());
    }

    #[test]
    fn test_move_onto_taken_square_is_rejected() {
        let mut board = Board::empty();
        board.place(sq(2, 2), PieceColor::Black).unwrap();
        let late = board.place(sq(4, 2), PieceColor::Black).unwrap();
        board.place(sq(7, 7), PieceColor::White).unwrap();
        let mut game = game_with(board);

        let kept = game
            .legal_moves()
            .into_iter()
            .find(|mv| mv.piece() == late && mv.to() == sq(3, 3))
            .unwrap();
        game.try_move(sq(2, 2), sq(3, 3)).unwrap();
        game.try_move(sq(7, 7), sq(6, 6)).unwrap();
        let before = game.board().clone();

        assert_eq!(
            game.perform_move(&kept),
            Err(GameError::DestinationOccupied {
                piece: late,
                square: sq(3, 3),
            })
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.history_len(), 2);
        assert_eq!(game.board().piece(late).unwrap().square(), sq(4, 2));
    }

    #[test]
    fn test_capture_of_moved_piece_is_rejected() {
        let mut board = Board::empty();
        board.place_king(sq(2, 2), PieceColor::Black).unwrap();
        board.place(sq(1, 1), PieceColor::Black).unwrap();
        let victim = board.place(sq(3, 3), PieceColor::White).unwrap();
        board.place(sq(6, 6), PieceColor::White).unwrap();
        let kept = board.validate_move(PieceColor::Black, sq(2, 2), sq(4, 4)).unwrap();
        let mut game = Game::builder()
            .board(board)
            .first_turn(PieceColor::White)
            .build()
            .unwrap();

        game.try_move(sq(3, 3), sq(4, 2)).unwrap();

        assert_eq!(
            game.perform_move(&kept),
            Err(GameError::StaleMove {
                piece: victim,
                expected: sq(3, 3),
                actual: sq(4, 2),
            })
        );
        assert_eq!(game.board().count(PieceColor::White), 2);
        assert_eq!(game.steps(PieceColor::Black), 0);
    }

    #[test]
    fn test_undo_refuses_when_board_disagrees() {
        let mut board = Board::empty();
        board.place(sq(2, 2), PieceColor::Black).unwrap();
        let other = board.place(sq(0, 2), PieceColor::Black).unwrap();
        board.place(sq(7, 7), PieceColor::White).unwrap();
        let mut game = game_with(board);

        game.try_move(sq(2, 2), sq(3, 3)).unwrap();
        game.board.shift(other, sq(2, 2)).unwrap();

        assert!(!game.undo_move());
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.undo_count(PieceColor::Black), 0);
        assert_eq!(game.steps(PieceColor::Black), 1);
    }

    #[test]
    fn test_stale_move_is_rejected() {
        let mut game = Game::new(0).unwrap();
        let mv = game.legal_moves()[0].clone();
        game.perform_move(&mv).unwrap();

        let before = game.board().clone();
        let err = game.perform_move(&mv).unwrap_err();
        assert_eq!(
            err,
            GameError::StaleMove {
                piece: mv.piece(),
                expected: mv.from(),
                actual: mv.to(),
            }
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.steps(PieceColor::Black), 1);
    }

    #[test]
    fn test_unknown_piece_is_rejected() {
        let mut other = Board::empty();
        other.place(sq(0, 0), PieceColor::Black).unwrap();
        other.place(sq(2, 0), PieceColor::Black).unwrap();
        let third = other.place(sq(4, 0), PieceColor::Black).unwrap();
        let foreign = other.piece_moves(third)[0].clone();

        let mut board = Board::empty();
        board.place(sq(7, 7), PieceColor::White).unwrap();
        board.place_king(sq(5, 5), PieceColor::Black).unwrap();
        let mut game = game_with(board);

        assert_eq!(game.perform_move(&foreign), Err(GameError::UnknownPiece(third)));
        assert_eq!(game.history_len(), 0);
    }

    #[test]
    fn test_move_after_game_over() {
        let mut board = Board::empty();
        board.place(sq(2, 2), PieceColor::Black).unwrap();
        board.place(sq(3, 3), PieceColor::White).unwrap();
        let mut game = game_with(board);

        game.try_move(sq(2, 2), sq(4, 4)).unwrap();
        assert_eq!(game.winner(), Some(PieceColor::Black));
        assert_eq!(
            game.try_move(sq(4, 4), sq(5, 5)),
            Err(GameError::GameOver(PieceColor::Black))
        );
    }

    #[test]
    fn test_illegal_try_move() {
        let mut game = Game::new(2).unwrap();
        let err = game.try_move(sq(1, 2), sq(1, 3)).unwrap_err();

        assert_eq!(
            err,
            GameError::IllegalMove {
                color: PieceColor::Black,
                from: sq(1, 2),
                to: sq(1, 3),
            }
        );
        assert_eq!(game.history_len(), 0);
    }

    #[test]
    fn test_undo_restores_capture() {
        let mut board = Board::empty();
        board.place(sq(2, 2), PieceColor::Black).unwrap();
        board.place_king(sq(3, 3), PieceColor::White).unwrap();
        board.place(sq(7, 7), PieceColor::White).unwrap();
        let mut game = game_with(board);
        let before = game.board().clone();

        game.try_move(sq(2, 2), sq(4, 4)).unwrap();
        assert!(game.undo_move());

        assert_eq!(game.board(), &before);
        assert!(game.board().piece_at(sq(3, 3)).unwrap().is_promoted());
        assert_eq!(game.turn(), PieceColor::Black);
        assert_eq!(game.steps(PieceColor::Black), 0);
        assert_eq!(game.undo_count(PieceColor::Black), 1);
    }

    #[test]
    fn test_undo_mid_chain_reopens_chain() {
        let mut board = Board::empty();
        let chaser = board.place(sq(0, 0), PieceColor::Black).unwrap();
        board.place(sq(1, 1), PieceColor::White).unwrap();
        board.place(sq(3, 3), PieceColor::White).unwrap();
        board.place(sq(5, 5), PieceColor::White).unwrap();
        board.place(sq(7, 1), PieceColor::White).unwrap();
        let mut game = game_with(board);

        game.try_move(sq(0, 0), sq(2, 2)).unwrap();
        game.try_move(sq(2, 2), sq(4, 4)).unwrap();
        assert_eq!(game.board().aggressor_id(), Some(chaser));

        // Back one jump: still mid-chain
        assert!(game.undo_move());
        assert_eq!(game.board().aggressor_id(), Some(chaser));
        assert_eq!(game.turn(), PieceColor::Black);

        // Back to the start: no chain
        assert!(game.undo_move());
        assert_eq!(game.board().aggressor_id(), None);
        assert_eq!(game.board().count(PieceColor::White), 4);
    }

    #[test]
    fn test_undo_limit() {
        let mut game = Game::new(1).unwrap();

        for used in 1..=3 {
            let mv = game.legal_moves()[0].clone();
            game.perform_move(&mv).unwrap();
            assert!(game.undo_move());
            assert_eq!(game.undo_count(PieceColor::Black), used);
            assert_eq!(game.turn(), PieceColor::Black);
        }

        let mv = game.legal_moves()[0].clone();
        game.perform_move(&mv).unwrap();
        let before = game.board().clone();

        assert!(!game.undo_move());
        assert_eq!(game.undo_count(PieceColor::Black), 3);
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.turn(), PieceColor::White);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_undo_charges_the_mover() {
        let mut game = Game::new(2).unwrap();
        let mv = game.legal_moves()[0].clone();
        game.perform_move(&mv).unwrap();
        let reply = game.legal_moves()[0].clone();
        game.perform_move(&reply).unwrap();

        assert!(game.undo_move());
        assert_eq!(game.undo_count(PieceColor::White), 1);
        assert_eq!(game.undo_count(PieceColor::Black), 0);
        assert_eq!(game.turn(), PieceColor::White);
        assert_eq!(game.steps(PieceColor::White), 0);
        assert_eq!(game.steps(PieceColor::Black), 1);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut game = Game::new(0).unwrap();
        assert!(!game.undo_move());
        assert_eq!(game.undo_count(PieceColor::Black), 0);
    }

    #[test]
    fn test_no_pieces_loses() {
        let mut board = Board::empty();
        board.place(sq(0, 0), PieceColor::Black).unwrap();
        let mut game = game_with(board);

        assert_eq!(game.check_for_winner(), Some(PieceColor::Black));
    }

    #[test]
    fn test_no_moves_loses() {
        let mut board = Board::empty();
        board.place(sq(0, 7), PieceColor::Black).unwrap();
        board.place(sq(7, 0), PieceColor::White).unwrap();
        let mut game = game_with(board);

        // Black man on its last row without the crown has nowhere to go
        assert_eq!(game.check_for_winner(), Some(PieceColor::White));
    }

    #[test]
    fn test_empty_board_goes_to_black() {
        let mut game = game_with(Board::empty());
        assert_eq!(game.check_for_winner(), Some(PieceColor::Black));
    }

    #[test]
    fn test_winner_is_sticky() {
        let mut board = Board::empty();
        board.place(sq(0, 0), PieceColor::Black).unwrap();
        let mut game = game_with(board);
        game.check_for_winner();

        assert_eq!(game.check_for_winner(), Some(PieceColor::Black));
        assert!(game.is_over());
    }
}
