//! Error types for game construction.

use thiserror::Error;

/// Rejected configuration. The simulation itself never fails once built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Too narrow for the border ring plus one spawn column
    #[error("viewport width must be at least {min}, got {actual}")]
    TooNarrow { min: i32, actual: i32 },

    /// Too short for the border ring plus one spawn row
    #[error("viewport height must be at least {min}, got {actual}")]
    TooShort { min: i32, actual: i32 },

    #[error("tick duration must be non-zero")]
    ZeroTickDuration,

    /// Random player spawn requested but every spawn cell is a wall
    #[error("no wall-free cell to spawn the player in")]
    NoFreeSpawnCell,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
