//! Enemy waves.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::entities::{ChaserEnemy, ShooterEnemy, World};
use crate::geometry::{Position, HORIZONTAL_STEP};

/// Ticks between waves.
pub const WAVE_INTERVAL: u64 = 30;

/// A random in-bounds cell on the even column grid. Walls and other entities
/// are not avoided.
pub fn random_cell(width: i32, height: i32, rng: &mut impl Rng) -> Position {
    let x = rng.gen_range(0..(width - 2) / HORIZONTAL_STEP) * HORIZONTAL_STEP;
    let y = rng.gen_range(0..height - 3) + 1;
    Position::new(x, y)
}

/// A random cell from the same grid as `random_cell`, restricted to cells
/// that are not wall-occupied. `None` when the maze leaves no such cell.
pub fn random_free_cell(world: &World, rng: &mut impl Rng) -> Option<Position> {
    let columns = (world.width - 2) / HORIZONTAL_STEP;
    let free: Vec<Position> = (0..columns)
        .flat_map(|col| {
            (1..world.height - 2).map(move |y| Position::new(col * HORIZONTAL_STEP, y))
        })
        .filter(|&cell| !world.is_blocked(cell))
        .collect();
    free.choose(rng).copied()
}

/// Spawn the wave due on the current tick, if any. Wave `k` brings exactly
/// `k` enemies with a random chaser/shooter split. Returns how many spawned.
pub fn spawn_wave(world: &mut World, rng: &mut impl Rng) -> u64 {
    if world.tick % WAVE_INTERVAL != 0 {
        return 0;
    }
    let wave = world.tick / WAVE_INTERVAL;
    let chasers = rng.gen_range(0..=wave);
    let shooters = wave - chasers;

    for _ in 0..shooters {
        let pos = random_cell(world.width, world.height, rng);
        world.shooters.push(ShooterEnemy::new(pos, rng));
    }
    for _ in 0..chasers {
        let pos = random_cell(world.width, world.height, rng);
        world.chasers.push(ChaserEnemy::new(pos, rng));
    }

    if wave > 0 {
        debug!("wave {}: {} shooters, {} chasers", wave, shooters, chasers);
    }
    wave
}
