//! Seeded randomness for computer players.
//!
//! Every random choice a strategy makes goes through a `GameRng`, so a seed
//! fully determines a computer-vs-computer match.
//!
//! ```
//! use rust_checkers::core::{GameRng, PieceColor};
//!
//! let rng = GameRng::new(42);
//! let mut black = rng.for_side(PieceColor::Black);
//! let mut again = GameRng::new(42).for_side(PieceColor::Black);
//!
//! let options = ["A3-B4", "C3-B4", "C3-D4"];
//! assert_eq!(black.choose(&options), again.choose(&options));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::color::PieceColor;

/// Mixes a side into a seed so both sides draw from unrelated streams.
const SIDE_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A separate stream for one side, derived from this RNG's seed.
    ///
    /// Independent of how much this RNG has been used.
    #[must_use]
    pub fn for_side(&self, color: PieceColor) -> Self {
        let salt = SIDE_SALT.wrapping_mul(color.index() as u64 + 1);
        Self::new(self.seed ^ salt)
    }

    /// Pick a uniformly random element, or `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.inner)
    }

    /// Capture the stream position so it can be resumed later.
    #[must_use]
    pub fn snapshot(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream captured with [`GameRng::snapshot`].
    #[must_use]
    pub fn restore(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

/// Serializable position of a `GameRng` stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}
