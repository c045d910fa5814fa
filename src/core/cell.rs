//! Cell vocabulary and the fixed-size grid container.
//!
//! Every cell carries two orthogonal attributes:
//! - `CellState`: occupancy (`Invalid`, `Empty`, `Peg`)
//! - `CellType`: terrain or marker (`Ice`, `Goal`, `King`, ...)
//!
//! `Grid` stores them for a fixed `ROWS × COLS` board. It knows nothing about
//! rules; writes outside the grid are silently ignored and reads outside the
//! grid report an `Invalid/Normal` cell.
//!
//! ```
//! use peg_floors::core::{CellState, Coord, Grid};
//!
//! let mut grid = Grid::new();
//! grid.set_state(Coord::new(3, 3), CellState::Peg);
//! grid.set_state(Coord::new(-1, 9), CellState::Peg); // ignored
//!
//! assert_eq!(grid.state(Coord::new(3, 3)), CellState::Peg);
//! assert_eq!(grid.state(Coord::new(-1, 9)), CellState::Invalid);
//! ```

use serde::{Deserialize, Serialize};

/// Board height.
pub const ROWS: usize = 7;

/// Board width.
pub const COLS: usize = 7;

/// Occupancy of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Outside the playable shape.
    #[default]
    Invalid,
    /// Playable, no peg.
    Empty,
    /// Playable, holds a peg.
    Peg,
}

/// Special behavior attached to a cell, independent of its occupancy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    #[default]
    Normal,
    /// A piece landing here slides one more cell in its direction of travel.
    Ice,
    /// Starts empty.
    Swamp,
    /// Can be neither landed on nor jumped over.
    Barrier,
    /// Lattice-mode target cell.
    Goal,
    /// Marks the King piece in Chess mode.
    King,
    /// Sends a landing piece to the same cell on the next floor.
    Teleport,
}

impl CellType {
    /// Goal and King cells are never overwritten by random placement or teleports.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, CellType::Goal | CellType::King)
    }
}

/// One grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub state: CellState,
    pub kind: CellType,
}

impl Cell {
    /// Create a cell.
    #[must_use]
    pub const fn new(state: CellState, kind: CellType) -> Self {
        Self { state, kind }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self.state, CellState::Invalid)
    }

    #[must_use]
    pub const fn has_peg(self) -> bool {
        matches!(self.state, CellState::Peg)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self.state, CellState::Empty)
    }
}

/// Grid coordinate.
///
/// Signed so that callers can step to off-board positions (`row - 2`) without
/// wrapping; any coordinate outside the grid simply reads as invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The board center.
    #[must_use]
    pub const fn center() -> Self {
        Self::new(ROWS as i32 / 2, COLS as i32 / 2)
    }

    /// Whether this coordinate lies inside `[0, ROWS) × [0, COLS)`.
    #[must_use]
    pub const fn in_grid(self) -> bool {
        self.row >= 0 && self.row < ROWS as i32 && self.col >= 0 && self.col < COLS as i32
    }

    /// Step `distance` cells in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction, distance: i32) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr * distance, self.col + dc * distance)
    }

    /// Manhattan distance to another coordinate.
    #[must_use]
    pub const fn manhattan(self, other: Coord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Iterate every grid coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..ROWS as i32).flat_map(|row| (0..COLS as i32).map(move |col| Coord::new(row, col)))
    }

    fn index(self) -> Option<(usize, usize)> {
        self.in_grid().then_some((self.row as usize, self.col as usize))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Axis-aligned direction of travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Down, Direction::Up, Direction::Left, Direction::Right];

    /// Unit `(row, col)` offset.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Direction of a straight two-cell jump, if `from → to` is one.
    #[must_use]
    pub fn of_jump(from: Coord, to: Coord) -> Option<Self> {
        match (to.row - from.row, to.col - from.col) {
            (-2, 0) => Some(Direction::Up),
            (2, 0) => Some(Direction::Down),
            (0, -2) => Some(Direction::Left),
            (0, 2) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Fixed `ROWS × COLS` cell storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
}

impl Grid {
    /// A grid with every cell `Invalid/Normal`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a cell. Off-grid coordinates read as `Invalid/Normal`.
    #[must_use]
    pub fn get(&self, at: Coord) -> Cell {
        at.index().map_or_else(Cell::default, |(r, c)| self.cells[r][c])
    }

    #[must_use]
    pub fn state(&self, at: Coord) -> CellState {
        self.get(at).state
    }

    #[must_use]
    pub fn kind(&self, at: Coord) -> CellType {
        self.get(at).kind
    }

    /// Overwrite a whole cell. No-op off the grid.
    pub fn put(&mut self, at: Coord, cell: Cell) {
        if let Some((r, c)) = at.index() {
            self.cells[r][c] = cell;
        }
    }

    /// Set a cell's state. No-op off the grid.
    pub fn set_state(&mut self, at: Coord, state: CellState) {
        if let Some((r, c)) = at.index() {
            self.cells[r][c].state = state;
        }
    }

    /// Set a cell's type. No-op off the grid.
    pub fn set_kind(&mut self, at: Coord, kind: CellType) {
        if let Some((r, c)) = at.index() {
            self.cells[r][c].kind = kind;
        }
    }

    /// Reset every cell to `Invalid/Normal`.
    pub fn clear(&mut self) {
        self.cells = [[Cell::default(); COLS]; ROWS];
    }

    /// Iterate `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(move |at| (at, self.get(at)))
    }
}
