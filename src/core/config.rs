//! Game configuration types.
//!
//! A game is configured once at startup by providing a `GameConfig`:
//! - `GameMode`: which victory rule-set applies
//! - `MapShape`: which cells of the 7×7 grid are playable
//! - `SpecialConfig`: which random special tiles are scattered
//! - floor count: how many stacked boards are played at once
//!
//! The same config is re-applied verbatim on restart. Configs can be built in
//! code, loaded from TOML, or assembled from raw collaborator input with the
//! lenient `*_or_default` parsers, which never fail.

use std::path::Path;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum number of stacked floors.
pub const MAX_FLOORS: u8 = 3;

/// Victory rule-set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Win by leaving exactly one peg.
    #[default]
    Classic,
    /// Win by leaving exactly one peg on the goal cell.
    Lattice,
    /// Keep the King alive until no move remains.
    Chess,
}

/// Playable shape carved out of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapShape {
    /// Rows 2-4 and columns 2-4.
    #[default]
    Cross,
    /// Rows 1-5 and columns 1-5.
    BigCross,
    /// Row `r` holds `2r + 1` centered cells.
    Triangle,
    /// Manhattan distance at most 3 from the center.
    Diamond,
}

/// Special tile toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialConfig {
    pub ice: bool,
    pub swamp: bool,
    pub barrier: bool,
    /// Dig a few random starting holes.
    pub extra_holes: bool,
}

impl SpecialConfig {
    /// Whether any random placement is requested.
    #[must_use]
    pub fn any(&self) -> bool {
        self.ice || self.swamp || self.barrier || self.extra_holes
    }
}

fn parse_choice<T: Copy>(raw: &str, kind: &'static str, table: &[(&str, T)]) -> Result<T, ConfigError> {
    let needle = raw.trim();
    // Menu numbers are 1-based, matching the order of `table`.
    if let Ok(n) = needle.parse::<usize>() {
        if let Some((_, value)) = n.checked_sub(1).and_then(|i| table.get(i)) {
            return Ok(*value);
        }
    }
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(needle))
        .map(|(_, value)| *value)
        .ok_or_else(|| ConfigError::UnknownChoice {
            kind,
            value: raw.to_string(),
        })
}

const MODE_CHOICES: [(&str, GameMode); 3] = [
    ("classic", GameMode::Classic),
    ("lattice", GameMode::Lattice),
    ("chess", GameMode::Chess),
];

const SHAPE_CHOICES: [(&str, MapShape); 4] = [
    ("cross", MapShape::Cross),
    ("bigcross", MapShape::BigCross),
    ("triangle", MapShape::Triangle),
    ("diamond", MapShape::Diamond),
];

impl FromStr for GameMode {
    type Err = ConfigError;

    /// Accepts a case-insensitive name or a 1-based menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, "game mode", &MODE_CHOICES)
    }
}

impl GameMode {
    /// Parse raw input, falling back to `Classic`.
    #[must_use]
    pub fn parse_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for MapShape {
    type Err = ConfigError;

    /// Accepts a case-insensitive name or a 1-based menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, "map shape", &SHAPE_CHOICES)
    }
}

impl MapShape {
    /// Parse raw input, falling back to `Cross`.
    #[must_use]
    pub fn parse_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

/// Parse a raw floor count, falling back to a single floor.
#[must_use]
pub fn parse_floors_or_default(raw: &str) -> u8 {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|n| (1..=MAX_FLOORS).contains(n))
        .unwrap_or(1)
}

/// Complete game configuration.
///
/// Deserializing validates the floor count, so a config read from outside
/// cannot carry zero or more than `MAX_FLOORS` floors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    /// Number of stacked floors (1-3).
    pub floors: u8,

    /// Victory rule-set.
    pub mode: GameMode,

    /// Playable shape.
    pub shape: MapShape,

    /// Random special tiles.
    pub special: SpecialConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            floors: 1,
            mode: GameMode::Classic,
            shape: MapShape::Cross,
            special: SpecialConfig::default(),
        }
    }
}

/// Unchecked wire form of `GameConfig`. Missing keys take their defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawGameConfig {
    floors: u8,
    mode: GameMode,
    shape: MapShape,
    special: SpecialConfig,
}

impl Default for RawGameConfig {
    fn default() -> Self {
        let GameConfig {
            floors,
            mode,
            shape,
            special,
        } = GameConfig::default();
        Self {
            floors,
            mode,
            shape,
            special,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        let config = GameConfig {
            floors: raw.floors,
            mode: raw.mode,
            shape: raw.shape,
            special: raw.special,
        };
        config.validate()?;
        Ok(config)
    }
}

impl GameConfig {
    /// Single-floor Classic game on the Cross.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the floor count.
    ///
    /// # Panics
    ///
    /// Panics if `floors` is outside `1..=3`.
    #[must_use]
    pub fn with_floors(mut self, floors: u8) -> Self {
        assert!((1..=MAX_FLOORS).contains(&floors), "Floor count must be 1-3");
        self.floors = floors;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: MapShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_special(mut self, special: SpecialConfig) -> Self {
        self.special = special;
        self
    }

    /// Enable ice tiles.
    #[must_use]
    pub fn with_ice(mut self) -> Self {
        self.special.ice = true;
        self
    }

    /// Enable swamp tiles.
    #[must_use]
    pub fn with_swamp(mut self) -> Self {
        self.special.swamp = true;
        self
    }

    /// Enable barrier tiles.
    #[must_use]
    pub fn with_barrier(mut self) -> Self {
        self.special.barrier = true;
        self
    }

    /// Enable random starting holes.
    #[must_use]
    pub fn with_extra_holes(mut self) -> Self {
        self.special.extra_holes = true;
        self
    }

    /// Assemble a config from raw collaborator input.
    ///
    /// Never fails: unreadable choices fall back to a single floor,
    /// `Classic` and `Cross`.
    #[must_use]
    pub fn from_choices(floors: &str, special: SpecialConfig, mode: &str, shape: &str) -> Self {
        Self {
            floors: parse_floors_or_default(floors),
            mode: GameMode::parse_or_default(mode),
            shape: MapShape::parse_or_default(shape),
            special,
        }
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_FLOORS).contains(&self.floors) {
            return Err(ConfigError::Validation(format!(
                "floors must be in 1..={MAX_FLOORS}, got {}",
                self.floors
            )));
        }
        Ok(())
    }

    /// This config, with an out-of-range floor count replaced by one floor.
    #[must_use]
    pub fn sanitized(self) -> Self {
        if let Err(err) = self.validate() {
            warn!("{err}; falling back to a single floor");
            return Self { floors: 1, ..self };
        }
        self
    }

    /// Floor count as `usize`.
    #[must_use]
    pub fn floor_count(&self) -> usize {
        usize::from(self.floors)
    }
}
