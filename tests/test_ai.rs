use std::collections::HashSet;

use ascii_shooter::ai::*;
use ascii_shooter::entities::*;
use ascii_shooter::geometry::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn shooter(x: i32, y: i32, tick: u64, last_shot: u32) -> ShooterEnemy {
    ShooterEnemy::with_counters(Position::new(x, y), tick, last_shot)
}

// ── try_to_shoot ──────────────────────────────────────────────────────────────

#[test]
fn shooter_above_player_fires_down() {
    let mut s = shooter(4, 2, 0, 21);
    let mut bullets = Vec::new();
    let fired = try_to_shoot(&mut s, Position::new(4, 8), &mut bullets, &mut seeded_rng());

    assert_eq!(fired, Some(Direction::Down));
    assert_eq!(bullets.len(), 1);
    let b = &bullets[0];
    assert_eq!(b.coordinates(), Position::new(4, 2));
    assert_eq!(b.vector, Direction::Down.vector());
    assert_eq!(b.owner, BulletOwner::Enemy);
    assert!(s.last_shot < 10);
}

#[test]
fn shooter_below_player_fires_up() {
    let mut s = shooter(4, 8, 0, 30);
    let mut bullets = Vec::new();
    let fired = try_to_shoot(&mut s, Position::new(4, 2), &mut bullets, &mut seeded_rng());
    assert_eq!(fired, Some(Direction::Up));
}

#[test]
fn shooter_on_same_row_fires_sideways() {
    let mut bullets = Vec::new();
    let mut rng = seeded_rng();

    let mut right_of_player = shooter(10, 4, 0, 21);
    let fired = try_to_shoot(&mut right_of_player, Position::new(4, 4), &mut bullets, &mut rng);
    assert_eq!(fired, Some(Direction::Left));

    let mut left_of_player = shooter(2, 4, 0, 21);
    let fired = try_to_shoot(&mut left_of_player, Position::new(4, 4), &mut bullets, &mut rng);
    assert_eq!(fired, Some(Direction::Right));

    assert_eq!(bullets.len(), 2);
}

#[test]
fn shooter_holds_fire_while_reloading() {
    let mut s = shooter(4, 2, 0, 20);
    let mut bullets = Vec::new();
    assert_eq!(
        try_to_shoot(&mut s, Position::new(4, 8), &mut bullets, &mut seeded_rng()),
        None
    );
    assert!(bullets.is_empty());
    assert_eq!(s.last_shot, 20);
}

#[test]
fn shooter_holds_fire_when_not_aligned() {
    let mut s = shooter(4, 2, 0, 50);
    let mut bullets = Vec::new();
    assert_eq!(
        try_to_shoot(&mut s, Position::new(6, 8), &mut bullets, &mut seeded_rng()),
        None
    );
    assert!(bullets.is_empty());
    assert_eq!(s.last_shot, 50);
}

// ── run_shooter ───────────────────────────────────────────────────────────────

#[test]
fn shooter_fires_at_most_once_per_tick() {
    let mut s = shooter(4, 2, 0, 25);
    let mut bullets = Vec::new();
    run_shooter(&mut s, Position::new(4, 8), &HashSet::new(), &mut bullets, &mut seeded_rng());
    assert_eq!(bullets.len(), 1);
    assert_eq!(s.tick, 1);
}

#[test]
fn shooter_can_fire_after_its_own_counter_tick() {
    // 20 is not enough before the tick, 21 is after it
    let mut s = shooter(4, 2, 0, 20);
    let mut bullets = Vec::new();
    run_shooter(&mut s, Position::new(4, 8), &HashSet::new(), &mut bullets, &mut seeded_rng());
    assert_eq!(bullets.len(), 1);
}

#[test]
fn shooter_stays_put_between_wanders() {
    let mut s = shooter(4, 4, 0, 0);
    let mut bullets = Vec::new();
    let mut rng = seeded_rng();
    for _ in 0..6 {
        run_shooter(&mut s, Position::new(21, 15), &HashSet::new(), &mut bullets, &mut rng);
    }
    assert_eq!(s.coordinates(), Position::new(4, 4));
    assert_eq!(s.tick, 6);
}

#[test]
fn shooter_wanders_one_step_every_seventh_tick() {
    let start = Position::new(10, 10);
    let mut s = ShooterEnemy::with_counters(start, 6, 0);
    let mut bullets = Vec::new();
    run_shooter(&mut s, Position::new(21, 15), &HashSet::new(), &mut bullets, &mut seeded_rng());

    let moved_to = s.coordinates();
    assert!(Direction::ALL.iter().any(|d| start + d.vector() == moved_to));
}

#[test]
fn shooter_never_wanders_into_walls() {
    let start = Position::new(10, 10);
    let blocked: HashSet<Position> = Direction::ALL.iter().map(|d| start + d.vector()).collect();
    let mut rng = seeded_rng();
    let mut bullets = Vec::new();
    let mut s = ShooterEnemy::with_counters(start, 0, 0);
    for _ in 0..70 {
        run_shooter(&mut s, Position::new(21, 15), &blocked, &mut bullets, &mut rng);
        assert_eq!(s.coordinates(), start);
    }
}

// ── Chasers ───────────────────────────────────────────────────────────────────

#[test]
fn pursuit_vector_is_sign_scaled() {
    assert_eq!(
        pursuit_vector(Position::new(10, 10), Position::new(4, 12)),
        Vector::new(-2, 1)
    );
    assert_eq!(
        pursuit_vector(Position::new(4, 12), Position::new(40, 2)),
        Vector::new(2, -1)
    );
    assert_eq!(
        pursuit_vector(Position::new(4, 4), Position::new(4, 4)),
        Vector::new(0, 0)
    );
}

#[test]
fn chaser_steps_every_speed_ticks() {
    let mut c = ChaserEnemy::with_speed(Position::new(2, 2), 5);
    let target = Position::new(10, 6);
    for _ in 0..4 {
        run_chaser(&mut c, target);
    }
    assert_eq!(c.coordinates(), Position::new(2, 2));
    run_chaser(&mut c, target);
    assert_eq!(c.coordinates(), Position::new(4, 3));
    for _ in 0..5 {
        run_chaser(&mut c, target);
    }
    assert_eq!(c.coordinates(), Position::new(6, 4));
}

// Deliberate asymmetry: shooters respect walls, chasers do not.
#[test]
fn chaser_walks_through_walls() {
    let mut w = World::new(40, 20, Position::new(10, 5));
    w.walls.push(Wall::new(4, 5));
    w.refresh_blocked();

    let mut c = ChaserEnemy::with_speed(Position::new(2, 5), 5);
    c.tick = 4;
    w.chasers.push(c);

    move_enemies(&mut w, &mut seeded_rng());
    assert_eq!(w.chasers[0].coordinates(), Position::new(4, 5));
    assert!(w.is_blocked(w.chasers[0].coordinates()));
}

#[test]
fn move_enemies_runs_both_species() {
    let mut w = World::new(40, 20, Position::new(10, 10));
    w.shooters.push(ShooterEnemy::with_counters(Position::new(10, 4), 0, 30));
    w.chasers.push(ChaserEnemy::with_speed(Position::new(20, 10), 9));

    move_enemies(&mut w, &mut seeded_rng());

    assert_eq!(w.shooters[0].tick, 1);
    assert_eq!(w.chasers[0].tick, 1);
    assert_eq!(w.bullets.len(), 1);
    assert_eq!(w.bullets[0].vector, Direction::Down.vector());
}
