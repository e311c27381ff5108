//! Point types in map and grid space.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in map coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl WorldPoint {
    /// The origin.
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other` (`t = 0` is self).
    #[inline]
    pub fn lerp(&self, other: &WorldPoint, t: f64) -> WorldPoint {
        WorldPoint::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for WorldPoint {
    type Output = WorldPoint;

    fn add(self, rhs: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for WorldPoint {
    type Output = WorldPoint;

    fn sub(self, rhs: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Integer cell coordinate in a label grid.
///
/// `x` indexes columns and `y` indexes rows. Coordinates may be negative or
/// exceed the grid; validity is checked by the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Saturates at the `i32` range; such coordinates are far outside any grid.
impl Add for GridCoord {
    type Output = GridCoord;

    #[inline]
    fn add(self, rhs: GridCoord) -> GridCoord {
        GridCoord::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        let a = WorldPoint::new(0.0, 0.0);
        let b = WorldPoint::new(10.0, -4.0);
        assert_eq!(a.lerp(&b, 0.5), WorldPoint::new(5.0, -2.0));
        assert_eq!(a.lerp(&b, 0.0), a);
    }

    #[test]
    fn test_grid_coord_add() {
        let c = GridCoord::new(3, -2) + GridCoord::new(-1, 5);
        assert_eq!(c, GridCoord::new(2, 3));
    }

    #[test]
    fn test_grid_coord_add_saturates() {
        let c = GridCoord::new(i32::MAX, i32::MIN) + GridCoord::new(1, -1);
        assert_eq!(c, GridCoord::new(i32::MAX, i32::MIN));
    }
}
