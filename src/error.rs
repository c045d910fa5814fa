//! Error types.
//!
//! Rule violations inside the engine are not errors: illegal jumps, off-board
//! coordinates and undo past the start all degrade to no-ops. The types here
//! cover the places a caller needs a reason back: loading configuration,
//! asking the runtime to play a move it cannot accept, and reading a stored
//! best-score record.

use std::path::PathBuf;

use crate::core::Coord;

/// Errors that can occur when loading or parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("unknown {kind} '{value}'")]
    UnknownChoice { kind: &'static str, value: String },

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Why the runtime refused a move request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejected {
    #[error("game is over")]
    GameOver,

    #[error("previous move is still settling")]
    ChainActive,

    #[error("illegal jump from {from} to {to}")]
    IllegalJump { from: Coord, to: Coord },
}

/// Errors parsing a best-score record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("best-score record is missing {0}")]
    MissingField(&'static str),

    #[error("not a count: '{0}'")]
    BadNumber(String),
}
