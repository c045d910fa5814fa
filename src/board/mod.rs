//! One playing floor.
//!
//! A `Board` owns a 7×7 grid and knows the single-floor rules:
//! - construction from a mode, shape and special-tile config (`setup`)
//! - jump legality, jump application and board queries (`rules`)
//!
//! Boards never fail. Illegal jumps, off-grid coordinates and writes to
//! cells outside the playable shape are silent no-ops.
//!
//! ## Example
//!
//! ```
//! use peg_floors::board::Board;
//! use peg_floors::core::{Coord, GameConfig, GameRng};
//!
//! let mut board = Board::from_config(&GameConfig::default(), &mut GameRng::new(1));
//! assert_eq!(board.count_pegs(), 32);
//!
//! assert!(board.apply_jump(Coord::new(1, 3), Coord::new(3, 3)));
//! assert_eq!(board.count_pegs(), 31);
//! ```

mod rules;
mod setup;

pub use rules::{Board, Targets};
pub use setup::{MAX_RANDOM, MIN_RANDOM, PLACEMENT_ATTEMPTS};

use crate::core::FloorMap;

/// The stacked floors of one game.
pub type Floors = FloorMap<Board>;
