//! End-of-game report and the Classic best-score record.
//!
//! The record is two integers, one per line: the fewest pegs ever left and
//! the fewest moves ever used in a Classic win. Reading and writing the file
//! is up to the caller; this module parses, renders and compares.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameMode;
use crate::error::ScoreError;

/// Summary handed to scoring collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameReport {
    pub win: bool,
    pub pegs_remaining: usize,
    pub move_count: u32,
    pub mode: GameMode,
}

/// Best Classic result seen so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BestScore {
    pub min_pegs: usize,
    pub min_moves: u32,
}

impl BestScore {
    /// Fold a finished game into the record.
    ///
    /// Only Classic wins count. Returns the record to store if it changed,
    /// `None` if the stored one stands.
    #[must_use]
    pub fn improve(current: Option<BestScore>, report: &GameReport) -> Option<BestScore> {
        if !report.win || report.mode != GameMode::Classic {
            return None;
        }
        let candidate = BestScore {
            min_pegs: report.pegs_remaining,
            min_moves: report.move_count,
        };
        let Some(best) = current else {
            return Some(candidate);
        };

        let merged = BestScore {
            min_pegs: best.min_pegs.min(candidate.min_pegs),
            min_moves: best.min_moves.min(candidate.min_moves),
        };
        (merged != best).then_some(merged)
    }
}

impl FromStr for BestScore {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());
        let pegs = lines.next().ok_or(ScoreError::MissingField("min_pegs"))?;
        let moves = lines.next().ok_or(ScoreError::MissingField("min_moves"))?;
        Ok(BestScore {
            min_pegs: pegs.parse().map_err(|_| ScoreError::BadNumber(pegs.to_string()))?,
            min_moves: moves.parse().map_err(|_| ScoreError::BadNumber(moves.to_string()))?,
        })
    }
}

impl std::fmt::Display for BestScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.min_pegs)?;
        writeln!(f, "{}", self.min_moves)
    }
}
