//! Undo history.
//!
//! Every entry is a deep copy of all floors plus the active floor index.
//! The stack always holds the starting position at the bottom; it can never
//! be popped, so undo past the start is a no-op.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Floors;
use crate::core::FloorId;

/// Full multi-floor position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub floors: Floors,
    pub active: FloorId,
}

/// LIFO stack of snapshots, one per applied move on top of the start.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct History {
    entries: Vector<Snapshot>,
}

impl History {
    /// Start a history at `initial`.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self {
            entries: Vector::unit(initial),
        }
    }

    /// Record the position before a move.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push_back(snapshot);
    }

    /// Pop the most recent snapshot. `None` once only the start remains.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop_back()
    }

    /// Number of stored snapshots, including the start.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// The starting position.
    #[must_use]
    pub fn initial(&self) -> &Snapshot {
        &self.entries[0]
    }
}
