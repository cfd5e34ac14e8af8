//! Board coordinates.
//!
//! A `Square` is always on the board: `x` and `y` are both in `0..8`.
//! Squares are written as a column letter `A`..`H` for `x` followed by a
//! rank digit `1`..`8` for `y + 1`, so `A1` is Black's corner:
//!
//! ```
//! use rust_checkers::core::Square;
//!
//! let sq: Square = "A1".parse().unwrap();
//! assert_eq!((sq.x(), sq.y()), (0, 0));
//! assert_eq!(Square::new(1, 7).unwrap().to_string(), "B8");
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 8;

/// An on-board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Create a square, failing if it lies off the board.
    pub fn new(x: u8, y: u8) -> Result<Self, GameError> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Ok(Self { x, y })
        } else {
            Err(GameError::OutOfBounds { x: x as i16, y: y as i16 })
        }
    }

    /// Column, `0..8`.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row, `0..8`.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// The square `(dx, dy)` away, if it is still on the board.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Self { x: x as u8, y: y as u8 })
        } else {
            None
        }
    }

    /// King-move distance between two squares.
    #[must_use]
    pub fn distance(self, other: Self) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Dark squares are the ones pieces start on. `A1` is dark.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.x + self.y) % 2 == 0
    }

    /// Iterate over every square, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Square { x, y }))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'A' + self.x) as char;
        let rank = (b'1' + self.y) as char;
        write!(f, "{file}{rank}")
    }
}

impl std::str::FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidNotation(s.to_string());
        let bytes = s.trim().as_bytes();
        let [file, rank] = bytes else {
            return Err(invalid());
        };

        let file = file.to_ascii_uppercase();
        if !(b'A'..b'A' + BOARD_SIZE).contains(&file) || !(b'1'..=b'0' + BOARD_SIZE).contains(rank) {
            return Err(invalid());
        }

        Square::new(file - b'A', rank - b'1')
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = GameError;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(x, y)
    }
}
