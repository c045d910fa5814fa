//! Core engine types: cells, coordinates, floors, RNG, configuration.
//!
//! These are the building blocks the board and runtime are made of. Nothing
//! here knows the jump rules.

pub mod cell;
pub mod config;
pub mod floor;
pub mod rng;

pub use cell::{Cell, CellState, CellType, Coord, Direction, Grid, COLS, ROWS};
pub use config::{GameConfig, GameMode, MapShape, SpecialConfig, MAX_FLOORS};
pub use floor::{FloorId, FloorMap};
pub use rng::GameRng;
