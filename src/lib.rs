//! # peg-floors
//!
//! A peg solitaire rules engine played on up to three stacked floors.
//!
//! A peg jumps orthogonally over a neighbour into an empty cell two steps
//! away, removing the jumped peg. On top of the classic game:
//!
//! - **Map shapes**: cross, big cross, triangle and diamond boards on a 7x7 grid
//! - **Special tiles**: ice slides a landing peg one cell further, barriers
//!   block jumps, swamps are plain terrain
//! - **Floors**: with two or more floors, four teleport tiles send a peg that
//!   comes to rest on them to the same cell one floor up
//! - **Modes**: Classic (finish with one peg), Lattice (finish with one peg
//!   on the goal cell) and Chess (keep the King alive)
//!
//! ## Modules
//!
//! - `core`: Coordinates, cells, floors, configuration, RNG
//! - `board`: One floor's grid, its setup and jump legality
//! - `moves`: Resolving a jump with its slide and teleport follow-ups
//! - `rules`: End-of-game evaluation per mode
//! - `game`: The runtime with undo history and the best-score record
//! - `error`: Error types

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod moves;
pub mod rules;

pub use crate::core::{
    Cell, CellState, CellType, Coord, Direction, FloorId, FloorMap, GameConfig, GameMode, GameRng, Grid,
    MapShape, SpecialConfig, COLS, MAX_FLOORS, ROWS,
};

pub use crate::board::{Board, Floors, Targets};

pub use crate::moves::{MoveOutcome, MoveResolver, TeleportHop};

pub use crate::rules::{GameResult, LossReason};

pub use crate::game::{BestScore, Game, GamePhase, GameReport, History, Snapshot};

pub use crate::error::{ConfigError, MoveRejected, ScoreError};
