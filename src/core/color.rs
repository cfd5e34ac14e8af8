//! Side identification and per-side data storage.
//!
//! ## PieceColor
//!
//! The two sides of a checkers match. Black moves first and advances
//! toward `y = 7`; White advances toward `y = 0`.
//!
//! ## ColorMap
//!
//! Per-side storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `PieceColor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceColor {
    Black,
    White,
}

impl PieceColor {
    /// Both colors in turn order.
    pub const ALL: [PieceColor; 2] = [PieceColor::Black, PieceColor::White];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PieceColor::Black => PieceColor::White,
            PieceColor::White => PieceColor::Black,
        }
    }

    /// Index into per-side arrays (Black = 0, White = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PieceColor::Black => 0,
            PieceColor::White => 1,
        }
    }

    /// Row direction a man of this color moves in.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            PieceColor::Black => 1,
            PieceColor::White => -1,
        }
    }

    /// The row on which a man of this color is crowned.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            PieceColor::Black => 7,
            PieceColor::White => 0,
        }
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceColor::Black => write!(f, "Black"),
            PieceColor::White => write!(f, "White"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_checkers::core::{ColorMap, PieceColor};
///
/// let mut steps: ColorMap<u32> = ColorMap::with_value(0);
/// steps[PieceColor::Black] += 1;
///
/// assert_eq!(steps[PieceColor::Black], 1);
/// assert_eq!(steps[PieceColor::White], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(PieceColor) -> T) -> Self {
        Self {
            data: [factory(PieceColor::Black), factory(PieceColor::White)],
        }
    }

    /// Create a new ColorMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, color: PieceColor) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, color: PieceColor) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (PieceColor, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceColor, &T)> {
        PieceColor::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<PieceColor> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: PieceColor) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<PieceColor> for ColorMap<T> {
    fn index_mut(&mut self, color: PieceColor) -> &mut Self::Output {
        self.get_mut(color)
    }
}
