use super::color::Color;
use super::point::Point;

/// Direction a cycle can travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit delta (dx, dy) for this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Per-tick velocity for a grid whose cells are `cell_size` units wide
    pub fn velocity(&self, cell_size: i32) -> Point {
        let (dx, dy) = self.delta();
        Point::new(dx, dy).scale(cell_size)
    }
}

/// The two seats at the table. Red always occupies index 0 of every per-player group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Green,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Green];

    pub fn index(&self) -> usize {
        match self {
            Player::Red => 0,
            Player::Green => 1,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::Red => Player::Green,
            Player::Green => Player::Red,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Player::Red => Color::RED,
            Player::Green => Color::GREEN,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Green => "Green",
        }
    }
}
