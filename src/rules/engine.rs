//! Win/loss evaluation across floors.
//!
//! Evaluation order matters in Chess mode: a captured King ends the game
//! at once, before the "no moves left" check is even consulted.

use serde::{Deserialize, Serialize};

use crate::board::Floors;
use crate::core::GameMode;

/// Why a finished game was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReason {
    /// Chess mode: no King piece is left standing.
    KingCaptured,
    /// No move left with more than one peg on the board.
    PegsRemaining(usize),
    /// Lattice mode: the last peg did not finish on the goal cell.
    MissedGoal,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Loss(LossReason),
}

impl GameResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, GameResult::Win)
    }
}

/// Total pegs over all floors.
#[must_use]
pub fn total_pegs(floors: &Floors) -> usize {
    floors.values().map(|board| board.count_pegs()).sum()
}

/// Living King pieces over all floors.
#[must_use]
pub fn kings_alive(floors: &Floors) -> usize {
    floors.values().map(|board| board.kings_alive()).sum()
}

/// Pegs standing on goal cells over all floors.
#[must_use]
pub fn pegs_on_goal(floors: &Floors) -> usize {
    floors.values().map(|board| board.pegs_on_goal()).sum()
}

/// Whether any floor still has a legal jump.
#[must_use]
pub fn any_move(floors: &Floors) -> bool {
    floors.values().any(|board| board.has_move())
}

/// Check if the game is over.
///
/// Returns `Some(result)` if the game has ended, `None` if it continues.
#[must_use]
pub fn evaluate(mode: GameMode, floors: &Floors) -> Option<GameResult> {
    if mode == GameMode::Chess && kings_alive(floors) == 0 {
        return Some(GameResult::Loss(LossReason::KingCaptured));
    }
    if any_move(floors) {
        return None;
    }

    let pegs = total_pegs(floors);
    let result = match mode {
        GameMode::Classic if pegs == 1 => GameResult::Win,
        GameMode::Lattice if pegs == 1 && pegs_on_goal(floors) == 1 => GameResult::Win,
        GameMode::Lattice if pegs == 1 => GameResult::Loss(LossReason::MissedGoal),
        GameMode::Classic | GameMode::Lattice => GameResult::Loss(LossReason::PegsRemaining(pegs)),
        GameMode::Chess => GameResult::Win,
    };
    Some(result)
}
