//! Board construction.
//!
//! A reset runs in fixed order:
//! 1. Blank the grid (`Invalid/Normal`)
//! 2. Carve the playable shape, filled with pegs
//! 3. Assign the win cell for the mode (Goal, King, or the Classic start hole)
//! 4. Dig random holes, if enabled
//! 5. Scatter ice, swamp and barrier tiles, if enabled
//! 6. Guarantee at least one empty cell so play can begin
//!
//! Random picks draw a uniform grid coordinate and retry on disqualified
//! cells. Every retry loop is capped by `PLACEMENT_ATTEMPTS`, so an
//! unlucky or crowded board ends up with fewer holes or tiles rather than
//! spinning forever.

use log::debug;

use super::Board;
use crate::core::{CellState, CellType, Coord, GameConfig, GameMode, GameRng, Grid, MapShape, SpecialConfig};

/// Upper bound on random draws for one batch of holes or one tile.
pub const PLACEMENT_ATTEMPTS: usize = 256;

/// Fewest random holes or tiles of one kind.
pub const MIN_RANDOM: usize = 1;

/// Most random holes or tiles of one kind.
pub const MAX_RANDOM: usize = 5;

impl MapShape {
    /// Whether `at` is part of this shape.
    #[must_use]
    pub fn contains(self, at: Coord) -> bool {
        if !at.in_grid() {
            return false;
        }
        let center = Coord::center();
        match self {
            MapShape::Cross => (2..=4).contains(&at.row) || (2..=4).contains(&at.col),
            MapShape::BigCross => (1..=5).contains(&at.row) || (1..=5).contains(&at.col),
            MapShape::Triangle => (at.col - center.col).abs() <= at.row,
            MapShape::Diamond => at.manhattan(center) <= 3,
        }
    }

    /// Number of cells in this shape.
    #[must_use]
    pub fn cell_count(self) -> usize {
        Coord::all().filter(|&at| self.contains(at)).count()
    }
}

impl Board {
    /// Build a board.
    #[must_use]
    pub fn new(mode: GameMode, shape: MapShape, special: SpecialConfig, rng: &mut GameRng) -> Self {
        let mut board = Self {
            grid: Grid::new(),
            mode,
            shape,
            special,
        };
        board.reset(rng);
        board
    }

    /// Build a board from a game config.
    #[must_use]
    pub fn from_config(config: &GameConfig, rng: &mut GameRng) -> Self {
        Self::new(config.mode, config.shape, config.special, rng)
    }

    /// Rebuild this board from its mode, shape and special config.
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.grid.clear();
        self.carve_shape();
        self.assign_win_cell();

        if self.special.extra_holes {
            let wanted = rng.count(MIN_RANDOM, MAX_RANDOM);
            let dug = self.dig_random_holes(rng, wanted);
            if dug < wanted {
                debug!("dug {dug} of {wanted} holes before running out of attempts");
            }
        }
        if self.special.ice {
            self.scatter(rng, CellType::Ice);
        }
        if self.special.swamp {
            self.scatter(rng, CellType::Swamp);
        }
        if self.special.barrier {
            self.scatter(rng, CellType::Barrier);
        }

        let has_hole = self.grid.iter().any(|(_, cell)| cell.is_empty());
        if !has_hole {
            self.dig_random_holes(rng, 1);
        }

        debug!(
            "built {:?} board for {:?}: {} pegs",
            self.shape,
            self.mode,
            self.count_pegs()
        );
    }

    fn carve_shape(&mut self) {
        let shape = self.shape;
        for at in Coord::all().filter(|&at| shape.contains(at)) {
            self.grid.set_state(at, CellState::Peg);
        }
    }

    /// Center if it qualifies, otherwise the first qualifying cell in
    /// row-major order.
    fn pick_win_cell(&self, qualifies: impl Fn(Coord) -> bool) -> Option<Coord> {
        let center = Coord::center();
        if qualifies(center) {
            return Some(center);
        }
        Coord::all().find(|&at| qualifies(at))
    }

    fn assign_win_cell(&mut self) {
        match self.mode {
            GameMode::Lattice => {
                if let Some(at) = self.pick_win_cell(|at| self.is_valid(at)) {
                    self.grid.set_kind(at, CellType::Goal);
                    self.grid.set_state(at, CellState::Empty);
                }
            }
            GameMode::Chess => {
                if let Some(at) = self.pick_win_cell(|at| self.at(at) == CellState::Peg) {
                    self.grid.set_kind(at, CellType::King);
                }
            }
            GameMode::Classic => {
                if let Some(at) = self.pick_win_cell(|at| self.is_valid(at)) {
                    self.grid.set_state(at, CellState::Empty);
                }
            }
        }
    }

    /// Empty up to `count` random unprotected pegs. Returns how many were dug.
    pub(super) fn dig_random_holes(&mut self, rng: &mut GameRng, count: usize) -> usize {
        let mut dug = 0;
        let mut attempts = 0;

        while dug < count && attempts < PLACEMENT_ATTEMPTS {
            attempts += 1;
            let at = rng.cell();
            let cell = self.grid.get(at);
            if cell.has_peg() && !cell.kind.is_protected() {
                self.grid.set_state(at, CellState::Empty);
                dug += 1;
            }
        }
        dug
    }

    /// Place 1-5 tiles of `kind` on random valid, unprotected cells.
    ///
    /// Swamp and barrier tiles never start with a peg on them.
    fn scatter(&mut self, rng: &mut GameRng, kind: CellType) -> usize {
        let wanted = rng.count(MIN_RANDOM, MAX_RANDOM);
        let mut placed = 0;

        for _ in 0..wanted {
            for _ in 0..PLACEMENT_ATTEMPTS {
                let at = rng.cell();
                let cell = self.grid.get(at);
                if !cell.is_valid() || cell.kind.is_protected() {
                    continue;
                }
                self.grid.set_kind(at, kind);
                if matches!(kind, CellType::Swamp | CellType::Barrier) {
                    self.grid.set_state(at, CellState::Empty);
                }
                placed += 1;
                break;
            }
        }
        placed
    }
}
