//! Board storage: the live piece set, square occupancy and the aggressor.

use im::OrdMap;
use rustc_hash::FxHashMap;

use crate::core::{GameError, Piece, PieceColor, PieceId, Square, PIECES_PER_COLOR};

/// The set of live pieces.
///
/// Pieces are kept in an `im::OrdMap` keyed by id, so iteration order is
/// deterministic and clones are cheap. A square index makes occupancy
/// lookups O(1).
///
/// ## Example
///
/// ```
/// use rust_checkers::{Board, PieceColor, Square};
///
/// let mut board = Board::empty();
/// let id = board.place_king(Square::new(2, 2).unwrap(), PieceColor::Black).unwrap();
///
/// let piece = board.piece(id).unwrap();
/// assert!(piece.is_promoted());
/// assert_eq!(board.count(PieceColor::Black), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pieces: OrdMap<PieceId, Piece>,
    occupancy: FxHashMap<Square, PieceId>,
    aggressor: Option<PieceId>,
    next_piece_id: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position: twelve men per side on the dark squares,
    /// Black on rows 0..=2 and White on rows 5..=7.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for square in Square::all().filter(|s| s.is_dark()) {
            let color = match square.y() {
                0..=2 => PieceColor::Black,
                5..=7 => PieceColor::White,
                _ => continue,
            };
            let id = board.alloc_id();
            board.restore_piece(Piece::new(id, square, color, false));
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            pieces: OrdMap::new(),
            occupancy: FxHashMap::default(),
            aggressor: None,
            next_piece_id: 0,
        }
    }

    /// Place a man.
    pub fn place(&mut self, square: Square, color: PieceColor) -> Result<PieceId, GameError> {
        self.place_piece(square, color, false)
    }

    /// Place a king.
    pub fn place_king(&mut self, square: Square, color: PieceColor) -> Result<PieceId, GameError> {
        self.place_piece(square, color, true)
    }

    fn place_piece(
        &mut self,
        square: Square,
        color: PieceColor,
        promoted: bool,
    ) -> Result<PieceId, GameError> {
        if self.occupancy.contains_key(&square) {
            return Err(GameError::SquareOccupied(square));
        }
        if self.count(color) >= PIECES_PER_COLOR {
            return Err(GameError::TooManyPieces(color));
        }

        let id = self.alloc_id();
        self.restore_piece(Piece::new(id, square, color, promoted));
        Ok(id)
    }

    fn alloc_id(&mut self) -> PieceId {
        let id = PieceId(self.next_piece_id);
        self.next_piece_id += 1;
        id
    }

    // === Queries ===

    /// Get a live piece by id.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Get the piece standing on a square.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.occupancy.get(&square).and_then(|id| self.pieces.get(id))
    }

    /// Check whether a square is free.
    #[must_use]
    pub fn is_vacant(&self, square: Square) -> bool {
        !self.occupancy.contains_key(&square)
    }

    /// Iterate over all live pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Iterate over one side's live pieces in id order.
    pub fn pieces_of(&self, color: PieceColor) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Number of live pieces of a color.
    #[must_use]
    pub fn count(&self, color: PieceColor) -> usize {
        self.pieces_of(color).count()
    }

    /// Total live pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The piece in the middle of a capture chain, if any.
    ///
    /// While set, it is the only piece allowed to move and it may only
    /// capture.
    #[must_use]
    pub fn aggressor(&self) -> Option<&Piece> {
        self.aggressor.and_then(|id| self.piece(id))
    }

    #[must_use]
    pub fn aggressor_id(&self) -> Option<PieceId> {
        self.aggressor
    }

    // === Mutation (engine only) ===

    /// Move a piece and crown it if it reached its last row.
    ///
    /// Returns true if the piece was promoted by this move.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) -> Result<bool, GameError> {
        self.shift(id, to)?;
        Ok(self
            .pieces
            .get_mut(&id)
            .is_some_and(|piece| piece.promote_if_on_last_row()))
    }

    /// Move a piece without touching its promotion flag.
    ///
    /// Fails without moving anything if another piece stands on `to`.
    pub(crate) fn shift(&mut self, id: PieceId, to: Square) -> Result<(), GameError> {
        if self.occupancy.get(&to).is_some_and(|&other| other != id) {
            return Err(GameError::SquareOccupied(to));
        }
        let piece = self.pieces.get_mut(&id).ok_or(GameError::UnknownPiece(id))?;
        let from = piece.square();
        piece.set_square(to);

        self.occupancy.remove(&from);
        self.occupancy.insert(to, id);
        Ok(())
    }

    /// Take a piece off the board, returning it as it was.
    pub(crate) fn remove_piece(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.pieces.remove(&id)?;
        self.occupancy.remove(&piece.square());
        if self.aggressor == Some(id) {
            self.aggressor = None;
        }
        Some(piece)
    }

    /// Put a piece (back) on the board under its own id.
    pub(crate) fn restore_piece(&mut self, piece: Piece) {
        self.occupancy.insert(piece.square(), piece.id());
        self.pieces.insert(piece.id(), piece);
    }

    pub(crate) fn set_aggressor(&mut self, aggressor: Option<PieceId>) {
        self.aggressor = aggressor;
    }
}
