//! Game runtime.
//!
//! `Game` owns every floor of a session and drives it: it validates and
//! resolves moves on the active floor, keeps the undo history, tracks the
//! move and peg counters, and evaluates the end of the game after each move.
//!
//! ## Example
//!
//! ```
//! use peg_floors::{Coord, Game, GameConfig, GamePhase};
//!
//! let mut game = Game::new(GameConfig::default(), 42);
//! assert_eq!(game.peg_count(), 32);
//!
//! game.try_move(Coord::new(1, 3), Coord::new(3, 3)).unwrap();
//! assert_eq!(game.peg_count(), 31);
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! assert!(game.undo());
//! assert_eq!(game.peg_count(), 32);
//! ```

mod history;
mod report;
mod runtime;

pub use history::{History, Snapshot};
pub use report::{BestScore, GameReport};
pub use runtime::{place_teleport_tiles, Game, GamePhase, TELEPORT_CELLS};
