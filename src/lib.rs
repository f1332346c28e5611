//! Simulation core of a grid-based ASCII shooter.
//!
//! The crate is headless: it owns the maze, the player, both enemy species
//! and every bullet in flight, and advances them one tick at a time. Drawing
//! and keyboard handling live in the binary (`main.rs` / `display.rs`).

pub mod ai;
pub mod collision;
pub mod commands;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod geometry;
pub mod maze;
pub mod spawner;

pub use commands::Command;
pub use config::{GameConfig, PlayerSpawn};
pub use error::ConfigError;
pub use game::{Game, Status, Termination};
pub use geometry::{Direction, Position, Vector};
