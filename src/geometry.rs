//! Grid coordinates and step vectors.
//!
//! A terminal cell is roughly twice as tall as it is wide, so one horizontal
//! step covers 2 columns while one vertical step covers a single row.

use std::ops::Add;

use rand::Rng;

/// Columns covered by one horizontal step.
pub const HORIZONTAL_STEP: i32 = 2;
/// Rows covered by one vertical step.
pub const VERTICAL_STEP: i32 = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

impl Vector {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl Add<Vector> for Position {
    type Output = Position;

    fn add(self, v: Vector) -> Position {
        Position::new(self.x + v.dx, self.y + v.dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// One step in this direction. Every mover in the game goes through here.
    pub const fn vector(self) -> Vector {
        match self {
            Direction::Up => Vector::new(0, -VERTICAL_STEP),
            Direction::Down => Vector::new(0, VERTICAL_STEP),
            Direction::Left => Vector::new(-HORIZONTAL_STEP, 0),
            Direction::Right => Vector::new(HORIZONTAL_STEP, 0),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}
