//! Floor identification and per-floor data storage.
//!
//! ## FloorId
//!
//! Type-safe floor index. Floors are 0-based and wrap: the floor above the
//! top one is floor 0.
//!
//! ## FloorMap
//!
//! Per-floor storage backed by `Vec` for O(1) access, indexable by `FloorId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Floor identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FloorId(pub u8);

impl FloorId {
    /// The ground floor.
    pub const GROUND: FloorId = FloorId(0);

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw floor index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The next floor up, wrapping to the ground floor.
    ///
    /// ```
    /// use peg_floors::core::FloorId;
    ///
    /// assert_eq!(FloorId::new(0).next(3), FloorId::new(1));
    /// assert_eq!(FloorId::new(2).next(3), FloorId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, floor_count: usize) -> Self {
        FloorId(((self.index() + 1) % floor_count.max(1)) as u8)
    }
}

impl std::fmt::Display for FloorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Floor {}", self.0)
    }
}

/// Per-floor data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloorMap<T> {
    data: Vec<T>,
}

impl<T> FloorMap<T> {
    /// Create a new FloorMap with values from a factory function.
    pub fn new(floor_count: usize, mut factory: impl FnMut(FloorId) -> T) -> Self {
        assert!(floor_count > 0, "Must have at least 1 floor");
        assert!(floor_count <= 255, "At most 255 floors supported");

        let data = (0..floor_count as u8).map(|i| factory(FloorId(i))).collect();

        Self { data }
    }

    /// Wrap already-built floors.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 floor");
        assert!(data.len() <= 255, "At most 255 floors supported");
        Self { data }
    }

    /// Get the number of floors.
    #[must_use]
    pub fn floor_count(&self) -> usize {
        self.data.len()
    }

    /// Get a floor's data, `None` if out of range.
    #[must_use]
    pub fn get(&self, floor: FloorId) -> Option<&T> {
        self.data.get(floor.index())
    }

    /// Get a floor's data mutably, `None` if out of range.
    pub fn get_mut(&mut self, floor: FloorId) -> Option<&mut T> {
        self.data.get_mut(floor.index())
    }

    /// Whether `floor` exists.
    #[must_use]
    pub fn contains(&self, floor: FloorId) -> bool {
        floor.index() < self.data.len()
    }

    /// Iterate over (FloorId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (FloorId, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (FloorId(i as u8), v))
    }

    /// Iterate over (FloorId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (FloorId, &mut T)> {
        self.data.iter_mut().enumerate().map(|(i, v)| (FloorId(i as u8), v))
    }

    /// Iterate over the floor values.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Borrow two distinct floors mutably at once.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or either floor is out of range.
    pub fn pair_mut(&mut self, a: FloorId, b: FloorId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "Floors must differ");
        let (i, j) = (a.index(), b.index());
        if i < j {
            let (lo, hi) = self.data.split_at_mut(j);
            (&mut lo[i], &mut hi[0])
        } else {
            let (lo, hi) = self.data.split_at_mut(i);
            (&mut hi[0], &mut lo[j])
        }
    }
}

impl<T> Index<FloorId> for FloorMap<T> {
    type Output = T;

    fn index(&self, floor: FloorId) -> &Self::Output {
        &self.data[floor.index()]
    }
}

impl<T> IndexMut<FloorId> for FloorMap<T> {
    fn index_mut(&mut self, floor: FloorId) -> &mut Self::Output {
        &mut self.data[floor.index()]
    }
}
