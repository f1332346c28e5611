//! Enemy behaviour.
//!
//! Shooters hold their ground, fire along the player's row or column and
//! shuffle in a random direction every few ticks. Chasers walk straight at the
//! player and, unlike shooters, ignore walls entirely.

use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::entities::{Bullet, BulletOwner, ChaserEnemy, HasPosition, ShooterEnemy, World};
use crate::geometry::{Direction, Position, Vector, HORIZONTAL_STEP};

/// A shooter may fire once `last_shot` exceeds this.
pub const SHOT_THRESHOLD: u32 = 20;
/// Shooters wander once every this many ticks.
pub const WANDER_INTERVAL: u64 = 7;

/// Fire at the player if the cooldown has run out and the player shares the
/// shooter's column or row. Returns the new bullet's direction, if any.
pub fn try_to_shoot(
    shooter: &mut ShooterEnemy,
    player: Position,
    bullets: &mut Vec<Bullet>,
    rng: &mut impl Rng,
) -> Option<Direction> {
    if shooter.last_shot <= SHOT_THRESHOLD {
        return None;
    }
    let at = shooter.coordinates();
    let direction = if at.x == player.x {
        if at.y > player.y {
            Direction::Up
        } else {
            Direction::Down
        }
    } else if at.y == player.y {
        if at.x > player.x {
            Direction::Left
        } else {
            Direction::Right
        }
    } else {
        return None;
    };

    bullets.push(Bullet::new(BulletOwner::Enemy, direction, at));
    shooter.reload(rng);
    debug!("shooter at {:?} fired {:?}", at, direction);
    Some(direction)
}

/// One tick of shooter behaviour. The reload after a shot keeps the second
/// `try_to_shoot` from firing again in the same tick.
pub fn run_shooter(
    shooter: &mut ShooterEnemy,
    player: Position,
    blocked: &HashSet<Position>,
    bullets: &mut Vec<Bullet>,
    rng: &mut impl Rng,
) {
    try_to_shoot(shooter, player, bullets, rng);
    shooter.tick_me();
    if shooter.tick % WANDER_INTERVAL == 0 {
        let step = Direction::random(rng).vector();
        if !blocked.contains(&shooter.desired_coordinates(step)) {
            shooter.move_by(step);
        }
    }
    try_to_shoot(shooter, player, bullets, rng);
}

/// Step toward `target`, scaled to the asymmetric grid.
pub fn pursuit_vector(from: Position, target: Position) -> Vector {
    Vector::new(
        (target.x - from.x).signum() * HORIZONTAL_STEP,
        (target.y - from.y).signum(),
    )
}

/// One tick of chaser behaviour. No wall check: chasers walk through the maze.
pub fn run_chaser(chaser: &mut ChaserEnemy, player: Position) {
    chaser.tick += 1;
    if chaser.tick % u64::from(chaser.speed) == 0 {
        let step = pursuit_vector(chaser.coordinates(), player);
        chaser.move_by(step);
    }
}

/// All shooters, then all chasers.
pub fn move_enemies(world: &mut World, rng: &mut impl Rng) {
    let player = world.player.coordinates();
    for shooter in world.shooters.iter_mut() {
        run_shooter(shooter, player, &world.blocked, &mut world.bullets, rng);
    }
    for chaser in world.chasers.iter_mut() {
        run_chaser(chaser, player);
    }
}
