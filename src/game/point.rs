/// Extent of the playing field, in the same units as [`Point`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self { max_x, max_y }
    }

    /// Centre of the field (integer division, like every other grid computation)
    pub fn center(&self) -> Point {
        Point::new(self.max_x / 2, self.max_y / 2)
    }
}

/// A coordinate on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by another point (used with velocities)
    pub fn add(&self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn scale(&self, factor: i32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn reverse(&self) -> Self {
        self.scale(-1)
    }

    /// Wrap around the field edges. Negative coordinates come back in from the far side.
    pub fn wrapped(&self, bounds: Bounds) -> Self {
        Self {
            x: self.x.rem_euclid(bounds.max_x),
            y: self.y.rem_euclid(bounds.max_y),
        }
    }
}
