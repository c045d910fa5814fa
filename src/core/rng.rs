//! Seeded randomness for board setup.
//!
//! Setup is the only consumer: digging random holes and scattering special
//! tiles. The RNG is owned by the caller and handed into board construction,
//! so a seed fully determines every floor of a game.
//!
//! ```
//! use peg_floors::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.floor_stream().cell(), b.floor_stream().cell());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::cell::{Coord, COLS, ROWS};

/// Odd 64-bit constant spreading successive stream seeds apart.
const STREAM_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded RNG used to dig holes and scatter special tiles.
///
/// ChaCha8 keeps the sequence identical across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    streams: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            streams: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent RNG for one floor.
    ///
    /// Successive calls give different streams; the same seed always yields
    /// the same succession.
    #[must_use]
    pub fn floor_stream(&mut self) -> Self {
        self.streams += 1;
        Self::new(self.seed ^ self.streams.wrapping_mul(STREAM_GAMMA))
    }

    /// A uniformly random cell of the 7×7 grid, valid or not.
    pub fn cell(&mut self) -> Coord {
        let row = self.inner.gen_range(0..ROWS);
        let col = self.inner.gen_range(0..COLS);
        Coord::new(row as i32, col as i32)
    }

    /// A random count in `min..=max`.
    pub fn count(&mut self, min: usize, max: usize) -> usize {
        self.inner.gen_range(min..=max)
    }
}
