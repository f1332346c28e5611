//! Run configuration.

use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::geometry::Position;

pub const MIN_WIDTH: i32 = 4;
pub const MIN_HEIGHT: i32 = 4;

/// Where the player starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSpawn {
    Fixed(Position),
    /// Same distribution as enemy spawns.
    Random,
}

/// Configuration for starting a new run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Viewport columns.
    pub width: i32,
    /// Viewport rows.
    pub height: i32,
    /// Game time per tick. Only used for the elapsed time and the score; the
    /// driving loop decides the real pacing.
    pub tick_duration: Duration,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub player_spawn: PlayerSpawn,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            tick_duration: Duration::from_millis(50),
            seed: None,
            player_spawn: PlayerSpawn::Fixed(Position::new(4, 4)),
        }
    }
}

impl GameConfig {
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// The fixed spawn cell, or the top-left corner as a placeholder for a
    /// random spawn that is drawn once the maze exists.
    pub fn origin(&self) -> Position {
        match self.player_spawn {
            PlayerSpawn::Fixed(pos) => pos,
            PlayerSpawn::Random => Position::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_WIDTH {
            return Err(ConfigError::TooNarrow {
                min: MIN_WIDTH,
                actual: self.width,
            });
        }
        if self.height < MIN_HEIGHT {
            return Err(ConfigError::TooShort {
                min: MIN_HEIGHT,
                actual: self.height,
            });
        }
        if self.tick_duration.is_zero() {
            return Err(ConfigError::ZeroTickDuration);
        }
        Ok(())
    }
}
