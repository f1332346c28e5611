use ascii_shooter::entities::*;
use ascii_shooter::geometry::*;
use ascii_shooter::spawner::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_world() -> World {
    World::new(40, 20, Position::new(4, 4))
}

#[test]
fn no_wave_off_interval() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut w = make_world();
    for tick in 1..30 {
        w.tick = tick;
        assert_eq!(spawn_wave(&mut w, &mut rng), 0);
    }
    w.tick = 61;
    spawn_wave(&mut w, &mut rng);
    assert_eq!(w.enemy_count(), 0);
}

#[test]
fn tick_zero_is_an_empty_wave() {
    let mut w = make_world();
    assert_eq!(spawn_wave(&mut w, &mut StdRng::seed_from_u64(1)), 0);
    assert_eq!(w.enemy_count(), 0);
}

#[test]
fn wave_k_brings_exactly_k_enemies() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        for k in 1..6u64 {
            let mut w = make_world();
            w.tick = 30 * k;
            assert_eq!(spawn_wave(&mut w, &mut rng), k);
            assert_eq!(w.enemy_count() as u64, k);
        }
    }
}

#[test]
fn species_split_varies_between_waves() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut only_shooters = false;
    let mut only_chasers = false;
    for _ in 0..100 {
        let mut w = make_world();
        w.tick = 30;
        spawn_wave(&mut w, &mut rng);
        only_shooters |= w.shooters.len() == 1;
        only_chasers |= w.chasers.len() == 1;
    }
    assert!(only_shooters && only_chasers);
}

#[test]
fn spawned_enemies_start_fresh() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut w = make_world();
    w.tick = 300;
    spawn_wave(&mut w, &mut rng);
    assert!(w.shooters.iter().all(|s| s.tick == 0 && s.last_shot < 10));
    assert!(w.chasers.iter().all(|c| c.tick == 0 && (5..13).contains(&c.speed)));
}

#[test]
fn random_cells_sit_on_even_columns_inside_viewport() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1000 {
        let p = random_cell(40, 20, &mut rng);
        assert_eq!(p.x % 2, 0);
        assert!((0..38).contains(&p.x));
        assert!((1..=17).contains(&p.y));
    }
}

#[test]
fn free_cells_avoid_walls() {
    let mut rng = StdRng::seed_from_u64(8);
    let w = World::new(80, 24, Position::new(4, 4));
    for _ in 0..500 {
        let p = random_free_cell(&w, &mut rng).expect("open arena");
        assert_eq!(p.x % 2, 0);
        assert!(!w.is_blocked(p));
        assert!((1..=21).contains(&p.y));
    }
}
