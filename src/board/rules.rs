//! Single-floor board: cell access, jump legality, jump application, queries.

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, CellState, CellType, Coord, Direction, GameMode, Grid, MapShape, SpecialConfig};

/// Up to four jump destinations from one cell.
pub type Targets = SmallVec<[Coord; 4]>;

/// One floor of play.
///
/// Holds the 7×7 grid plus the mode, shape and special config it was built
/// from. Changing those with the setters takes effect on the next `reset`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub(super) grid: Grid,
    pub(super) mode: GameMode,
    pub(super) shape: MapShape,
    pub(super) special: SpecialConfig,
}

impl Board {
    // === Configuration ===

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn shape(&self) -> MapShape {
        self.shape
    }

    #[must_use]
    pub fn special(&self) -> SpecialConfig {
        self.special
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    pub fn set_shape(&mut self, shape: MapShape) {
        self.shape = shape;
    }

    pub fn set_special(&mut self, special: SpecialConfig) {
        self.special = special;
    }

    // === Cell Access ===

    /// Read-only view of the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn cell(&self, at: Coord) -> Cell {
        self.grid.get(at)
    }

    #[must_use]
    pub fn at(&self, at: Coord) -> CellState {
        self.grid.state(at)
    }

    #[must_use]
    pub fn type_at(&self, at: Coord) -> CellType {
        self.grid.kind(at)
    }

    /// Whether `at` is on the grid and part of the playable shape.
    #[must_use]
    pub fn is_valid(&self, at: Coord) -> bool {
        self.grid.get(at).is_valid()
    }

    /// Set a cell's state.
    ///
    /// Ignored off the grid, on `Invalid` cells, and when asked to write
    /// `Invalid`: the playable shape is fixed once built.
    pub fn set(&mut self, at: Coord, state: CellState) {
        if self.is_valid(at) && state != CellState::Invalid {
            self.grid.set_state(at, state);
        }
    }

    /// Set a cell's type. Ignored off the grid and on `Invalid` cells.
    pub fn set_type(&mut self, at: Coord, kind: CellType) {
        if self.is_valid(at) {
            self.grid.set_kind(at, kind);
        }
    }

    // === Legality ===

    /// Whether the peg at `from` may jump to `to`.
    #[must_use]
    pub fn can_jump(&self, from: Coord, to: Coord) -> bool {
        let origin = self.cell(from);
        let dest = self.cell(to);

        if !origin.has_peg() || !dest.is_empty() || dest.kind == CellType::Barrier {
            return false;
        }
        let Some(direction) = Direction::of_jump(from, to) else {
            return false;
        };

        let mid = self.cell(from.step(direction, 1));
        mid.has_peg() && mid.kind != CellType::Barrier
    }

    /// Whether the peg at `at` has at least one legal jump.
    #[must_use]
    pub fn can_move(&self, at: Coord) -> bool {
        self.at(at) == CellState::Peg
            && Direction::ALL
                .iter()
                .any(|&d| self.can_jump(at, at.step(d, 2)))
    }

    /// Legal jump destinations from `at`. Empty if `at` holds no peg.
    #[must_use]
    pub fn possible_targets(&self, at: Coord) -> Targets {
        if self.at(at) != CellState::Peg {
            return Targets::new();
        }
        Direction::ALL
            .iter()
            .map(|&d| at.step(d, 2))
            .filter(|&to| self.can_jump(at, to))
            .collect()
    }

    /// Every legal `(from, to)` jump on this floor, in row-major origin order.
    #[must_use]
    pub fn legal_jumps(&self) -> Vec<(Coord, Coord)> {
        Coord::all()
            .flat_map(|from| self.possible_targets(from).into_iter().map(move |to| (from, to)))
            .collect()
    }

    // === Mutation ===

    /// Play a jump: the origin empties, the jumped peg is removed, the
    /// destination gains a peg.
    ///
    /// A King piece carries its marker to the destination. A captured King
    /// loses its marker for good. Returns `false` and changes nothing if the
    /// jump is illegal.
    pub fn apply_jump(&mut self, from: Coord, to: Coord) -> bool {
        if !self.can_jump(from, to) {
            return false;
        }
        let mid = Coord::new((from.row + to.row) / 2, (from.col + to.col) / 2);

        let king = self.lift_peg(from);
        let captured_king = self.lift_peg(mid);
        self.drop_peg(to, king);

        trace!("jump {from} -> {to} over {mid} (king: {king}, captured king: {captured_king})");
        true
    }

    /// Remove the peg at `at`. Returns whether it carried the King marker,
    /// which is cleared.
    pub(crate) fn lift_peg(&mut self, at: Coord) -> bool {
        self.grid.set_state(at, CellState::Empty);
        if self.grid.kind(at) == CellType::King {
            self.grid.set_kind(at, CellType::Normal);
            true
        } else {
            false
        }
    }

    /// Put a peg on `at`, marking it King if `king`.
    pub(crate) fn drop_peg(&mut self, at: Coord, king: bool) {
        self.grid.set_state(at, CellState::Peg);
        if king {
            self.grid.set_kind(at, CellType::King);
        }
    }

    // === Queries ===

    /// Number of pegs on this floor.
    #[must_use]
    pub fn count_pegs(&self) -> usize {
        self.grid.iter().filter(|(_, cell)| cell.has_peg()).count()
    }

    /// Whether any peg on this floor can jump.
    #[must_use]
    pub fn has_move(&self) -> bool {
        Coord::all().any(|at| self.can_move(at))
    }

    /// Exactly one peg left on this floor.
    ///
    /// Only meaningful for single-floor Classic games; the runtime decides
    /// wins across floors and modes.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.count_pegs() == 1
    }

    /// Cells of the given type.
    pub fn cells_of_type(&self, kind: CellType) -> impl Iterator<Item = Coord> + '_ {
        self.grid
            .iter()
            .filter(move |(_, cell)| cell.kind == kind)
            .map(|(at, _)| at)
    }

    /// Number of King pieces still standing on this floor.
    #[must_use]
    pub fn kings_alive(&self) -> usize {
        self.grid
            .iter()
            .filter(|(_, cell)| cell.kind == CellType::King && cell.has_peg())
            .count()
    }

    /// Where the King stands, if it is alive on this floor.
    #[must_use]
    pub fn king_cell(&self) -> Option<Coord> {
        self.grid
            .iter()
            .find(|(_, cell)| cell.kind == CellType::King && cell.has_peg())
            .map(|(at, _)| at)
    }

    /// The goal cell, if this floor has one.
    #[must_use]
    pub fn goal_cell(&self) -> Option<Coord> {
        self.cells_of_type(CellType::Goal).next()
    }

    /// Number of pegs standing on goal cells.
    #[must_use]
    pub fn pegs_on_goal(&self) -> usize {
        self.grid
            .iter()
            .filter(|(_, cell)| cell.kind == CellType::Goal && cell.has_peg())
            .count()
    }
}
