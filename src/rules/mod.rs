//! Victory rules.
//!
//! Each `GameMode` decides when a game ends and whether it was won:
//! - Classic: stuck with exactly one peg left
//! - Lattice: stuck with exactly one peg left, on the goal cell
//! - Chess: lose the moment no King stands, win when stuck with one alive
//!
//! Counts are taken over every floor.

pub mod engine;

pub use engine::{any_move, evaluate, kings_alive, pegs_on_goal, total_pegs, GameResult, LossReason};
