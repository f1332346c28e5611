//! The fixed maze template: a perimeter ring plus a handful of interior
//! segments. Interior segments are laid out for an 80-column terminal and
//! are clipped to the area inside the ring on smaller viewports.

use std::collections::HashSet;

use crate::entities::{HasPosition, Wall};
use crate::geometry::Position;

/// Interior segments as `(start_x, start_y, step_x, step_y, length)`.
const INTERIOR_SEGMENTS: [(i32, i32, i32, i32, i32); 4] = [
    (10, 7, 1, 0, 40),
    (30, 14, 1, 0, 40),
    (26, 10, 0, 1, 20),
    // dotted column: every other row
    (52, 0, 0, 2, 20),
];

/// Column of the right-hand border. Even widths leave one spare column so the
/// border lands on the even grid the horizontal movers live on.
pub fn right_border(width: i32) -> i32 {
    let pad = if width % 2 == 0 { 2 } else { 1 };
    width - pad
}

/// Build the complete wall list for a `width × height` viewport.
pub fn build_walls(width: i32, height: i32) -> Vec<Wall> {
    let right = right_border(width);
    let mut walls = Vec::new();

    for x in 0..=right {
        walls.push(Wall::new(x, 0));
        walls.push(Wall::new(x, height - 1));
    }
    for y in 0..height {
        walls.push(Wall::new(0, y));
        walls.push(Wall::new(right, y));
    }

    for (sx, sy, dx, dy, len) in INTERIOR_SEGMENTS {
        for i in 0..len {
            let (x, y) = (sx + dx * i, sy + dy * i);
            if x > 0 && x < right && y > 0 && y < height - 1 {
                walls.push(Wall::new(x, y));
            }
        }
    }

    walls
}

/// Snapshot of every wall-occupied cell.
pub fn occupied_cells(walls: &[Wall]) -> HashSet<Position> {
    walls.iter().map(|w| w.coordinates()).collect()
}
