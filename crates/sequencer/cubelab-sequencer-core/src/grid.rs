//! Coordinate generator for the 3×3×3 grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of positions in the grid.
pub const GRID_LEN: usize = 27;

/// One integer cell of the grid. Every component is in {-1, 0, 1}.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl GridCoordinate {
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// Position of this coordinate in the sequence returned by [`generate`].
    /// Returns `None` when a component falls outside {-1, 0, 1}.
    pub fn index(&self) -> Option<usize> {
        let axis = |v: i8| -> Option<usize> {
            match v {
                -1 => Some(0),
                0 => Some(1),
                1 => Some(2),
                _ => None,
            }
        };
        Some(axis(self.x)? * 9 + axis(self.y)? * 3 + axis(self.z)?)
    }

    /// Components scaled into world space.
    #[inline]
    pub fn scaled(&self, spacing: f32) -> [f32; 3] {
        [
            self.x as f32 * spacing,
            self.y as f32 * spacing,
            self.z as f32 * spacing,
        ]
    }

    /// True when the cell sits on the outer shell along `axis` in direction `sign`.
    #[inline]
    pub fn on_face(&self, axis: usize, sign: i8) -> bool {
        match axis {
            0 => self.x == sign,
            1 => self.y == sign,
            _ => self.z == sign,
        }
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Produce the 27 grid coordinates in sequence order.
///
/// x is the outermost loop and z the innermost, so z changes fastest:
/// index 0 is (-1, -1, -1), index 1 is (-1, -1, 0), index 26 is (1, 1, 1).
pub fn generate() -> Vec<GridCoordinate> {
    let mut out = Vec::with_capacity(GRID_LEN);
    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                out.push(GridCoordinate::new(x, y, z));
            }
        }
    }
    out
}
