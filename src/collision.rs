//! Collision resolution.
//!
//! Every stage works against coordinates only; enemies and bullets have no
//! extent beyond their one cell.

use log::debug;

use crate::entities::{HasPosition, World};

/// Remove every bullet standing on a wall cell.
pub fn remove_wall_hits(world: &mut World) {
    let blocked = &world.blocked;
    world.bullets.retain(|b| !blocked.contains(&b.coordinates()));
}

/// Player bullets destroy every enemy on their cell and are consumed once.
/// Enemy bullets pass through enemies untouched. Returns the number of
/// enemies destroyed.
pub fn remove_enemy_hits(world: &mut World) -> u32 {
    let shooters = &mut world.shooters;
    let chasers = &mut world.chasers;
    let mut destroyed = 0u32;

    world.bullets.retain(|bullet| {
        if !bullet.is_player() {
            return true;
        }
        let at = bullet.coordinates();
        let before = shooters.len() + chasers.len();
        shooters.retain(|e| e.coordinates() != at);
        chasers.retain(|e| e.coordinates() != at);
        let hit = (before - shooters.len() - chasers.len()) as u32;
        destroyed += hit;
        hit == 0
    });

    if destroyed > 0 {
        debug!("{} enemies destroyed", destroyed);
    }
    world.kills += destroyed;
    destroyed
}

/// Is any bullet, whoever fired it, on the player's cell?
pub fn player_shot(world: &World) -> bool {
    let at = world.player.coordinates();
    world.bullets.iter().any(|b| b.coordinates() == at)
}

/// Is any enemy of either species on the player's cell?
pub fn player_touched(world: &World) -> bool {
    let at = world.player.coordinates();
    world.chasers.iter().any(|e| e.coordinates() == at)
        || world.shooters.iter().any(|e| e.coordinates() == at)
}

/// Bullet stages of the collision pass, in order: walls, enemies, player.
/// Returns `true` when the player was hit.
pub fn resolve_collisions(world: &mut World) -> bool {
    remove_wall_hits(world);
    remove_enemy_hits(world);
    player_shot(world)
}
