//! All game entity types — plain data plus position bookkeeping.
//!
//! None of these types checks collisions; the `collision` module decides
//! what survives a tick.

use std::collections::HashSet;

use rand::Rng;

use crate::geometry::{Direction, Position, Vector};
use crate::maze;

/// Exclusive upper bound for a freshly drawn `last_shot` value.
pub const SHOT_COOLDOWN_JITTER: u32 = 10;
/// Chaser speeds are drawn from this range (ticks per step).
pub const CHASER_SPEED_RANGE: std::ops::Range<u32> = 5..13;

// ── Shared capability ────────────────────────────────────────────────────────

/// Anything that occupies one grid cell.
pub trait HasPosition {
    fn position(&self) -> Position;
    fn position_mut(&mut self) -> &mut Position;

    fn coordinates(&self) -> Position {
        self.position()
    }

    /// Where this entity would stand after moving by `v`. Does not mutate.
    fn desired_coordinates(&self, v: Vector) -> Position {
        self.position() + v
    }

    fn move_by(&mut self, v: Vector) {
        let pos = self.position_mut();
        *pos = *pos + v;
    }
}

macro_rules! impl_has_position {
    ($($ty:ty),*) => {
        $(
            impl HasPosition for $ty {
                fn position(&self) -> Position {
                    self.pos
                }

                fn position_mut(&mut self) -> &mut Position {
                    &mut self.pos
                }
            }
        )*
    };
}

impl_has_position!(Wall, Bullet, Player, ShooterEnemy, ChaserEnemy);

// ── Drawing categories ───────────────────────────────────────────────────────

/// Color category of a drawable. The frontend maps these to real colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Default,
    Green,
    Red,
    Blue,
    Yellow,
}

/// One cell of the read-only snapshot handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drawable {
    pub position: Position,
    pub glyph: char,
    pub tint: Tint,
}

pub trait Sprite: HasPosition {
    fn glyph(&self) -> char;

    fn tint(&self) -> Tint {
        Tint::Default
    }

    fn drawable(&self) -> Drawable {
        Drawable {
            position: self.position(),
            glyph: self.glyph(),
            tint: self.tint(),
        }
    }
}

// ── Walls ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wall {
    pos: Position,
}

impl Wall {
    pub fn new(x: i32, y: i32) -> Self {
        Self { pos: Position::new(x, y) }
    }
}

impl Sprite for Wall {
    fn glyph(&self) -> char {
        '#'
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bullet {
    pos: Position,
    pub vector: Vector,
    pub owner: BulletOwner,
}

impl Bullet {
    pub fn new(owner: BulletOwner, direction: Direction, pos: Position) -> Self {
        Self {
            pos,
            vector: direction.vector(),
            owner,
        }
    }

    pub fn is_player(&self) -> bool {
        self.owner == BulletOwner::Player
    }

    /// Advance by the bullet's own vector.
    pub fn advance(&mut self) {
        self.move_by(self.vector);
    }
}

impl Sprite for Bullet {
    fn glyph(&self) -> char {
        '*'
    }

    fn tint(&self) -> Tint {
        match self.owner {
            BulletOwner::Player => Tint::Green,
            BulletOwner::Enemy => Tint::Red,
        }
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pos: Position,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }
}

impl Sprite for Player {
    fn glyph(&self) -> char {
        '@'
    }

    fn tint(&self) -> Tint {
        Tint::Blue
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// Stationary-until-bored enemy that fires along rows and columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShooterEnemy {
    pos: Position,
    /// Age in ticks.
    pub tick: u64,
    /// Ticks since the last shot.
    pub last_shot: u32,
}

impl ShooterEnemy {
    pub fn new(pos: Position, rng: &mut impl Rng) -> Self {
        Self::with_counters(pos, 0, rng.gen_range(0..SHOT_COOLDOWN_JITTER))
    }

    pub fn with_counters(pos: Position, tick: u64, last_shot: u32) -> Self {
        Self { pos, tick, last_shot }
    }

    pub fn tick_me(&mut self) {
        self.tick += 1;
        self.last_shot += 1;
    }

    /// Restart the shot cooldown with a little jitter.
    pub fn reload(&mut self, rng: &mut impl Rng) {
        self.last_shot = rng.gen_range(0..SHOT_COOLDOWN_JITTER);
    }
}

impl Sprite for ShooterEnemy {
    fn glyph(&self) -> char {
        '&'
    }
}

/// Enemy that walks straight at the player every `speed` ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChaserEnemy {
    pos: Position,
    pub tick: u64,
    /// Ticks between steps. Always at least `CHASER_SPEED_RANGE.start`.
    pub speed: u32,
}

impl ChaserEnemy {
    pub fn new(pos: Position, rng: &mut impl Rng) -> Self {
        Self::with_speed(pos, rng.gen_range(CHASER_SPEED_RANGE))
    }

    /// Panics on a zero speed.
    pub fn with_speed(pos: Position, speed: u32) -> Self {
        assert!(speed > 0, "chaser speed must be positive");
        Self { pos, tick: 0, speed }
    }
}

impl Sprite for ChaserEnemy {
    fn glyph(&self) -> char {
        '%'
    }

    fn tint(&self) -> Tint {
        Tint::Yellow
    }
}

// ── Master simulation state ──────────────────────────────────────────────────

/// Everything that lives on the board, plus the per-run counters.
///
/// Fields are public so the pipeline stages (and tests) can work on the
/// collections directly; the `Game` orchestrator is the only production
/// caller that mutates them.
#[derive(Clone, Debug)]
pub struct World {
    pub width: i32,
    pub height: i32,
    pub walls: Vec<Wall>,
    /// Wall-occupied cells, refreshed from `walls` once per tick.
    pub blocked: HashSet<Position>,
    pub bullets: Vec<Bullet>,
    pub shooters: Vec<ShooterEnemy>,
    pub chasers: Vec<ChaserEnemy>,
    pub player: Player,
    /// Enemies destroyed by player fire, both species counted together.
    pub kills: u32,
    /// Completed ticks.
    pub tick: u64,
}

impl World {
    /// A board with the maze in place, no enemies and no bullets.
    pub fn new(width: i32, height: i32, player: Position) -> Self {
        let walls = maze::build_walls(width, height);
        let blocked = maze::occupied_cells(&walls);
        Self {
            width,
            height,
            walls,
            blocked,
            bullets: Vec::new(),
            shooters: Vec::new(),
            chasers: Vec::new(),
            player: Player::new(player),
            kills: 0,
            tick: 0,
        }
    }

    pub fn refresh_blocked(&mut self) {
        self.blocked = maze::occupied_cells(&self.walls);
    }

    pub fn is_blocked(&self, pos: Position) -> bool {
        self.blocked.contains(&pos)
    }

    pub fn enemy_count(&self) -> usize {
        self.shooters.len() + self.chasers.len()
    }
}
