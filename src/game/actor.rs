use rand::Rng;

use super::color::Color;
use super::point::{Bounds, Point};

pub const HEAD_GLYPH: char = '@';
pub const SEGMENT_GLYPH: char = '#';
pub const FOOD_GLYPH: char = '@';

/// What an actor is, with the data only that kind of actor needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorKind {
    Segment { glyph: char },
    Food { points: u32 },
    Score { label: String, points: u32 },
    Message { text: String },
}

/// Anything drawable that lives on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub position: Point,
    pub velocity: Point,
    pub color: Color,
    pub kind: ActorKind,
}

impl Actor {
    pub fn segment(position: Point, velocity: Point, color: Color, glyph: char) -> Self {
        Self {
            position,
            velocity,
            color,
            kind: ActorKind::Segment { glyph },
        }
    }

    pub fn food(position: Point, points: u32) -> Self {
        Self {
            position,
            velocity: Point::ZERO,
            color: Color::YELLOW,
            kind: ActorKind::Food { points },
        }
    }

    pub fn score(position: Point, color: Color, label: impl Into<String>) -> Self {
        Self {
            position,
            velocity: Point::ZERO,
            color,
            kind: ActorKind::Score {
                label: label.into(),
                points: 0,
            },
        }
    }

    pub fn message(position: Point, text: impl Into<String>) -> Self {
        Self {
            position,
            velocity: Point::ZERO,
            color: Color::WHITE,
            kind: ActorKind::Message { text: text.into() },
        }
    }

    /// Advance one step along the current velocity, wrapping at the field edges
    pub fn move_next(&mut self, bounds: Bounds) {
        self.position = self.position.add(self.velocity).wrapped(bounds);
    }

    /// The string the video service should put on screen for this actor
    pub fn text(&self) -> String {
        match &self.kind {
            ActorKind::Segment { glyph } => glyph.to_string(),
            ActorKind::Food { .. } => FOOD_GLYPH.to_string(),
            ActorKind::Score { label, points } => format!("{}: {}", label, points),
            ActorKind::Message { text } => text.clone(),
        }
    }

    /// Point value for food and score actors, zero for everything else
    pub fn points(&self) -> u32 {
        match self.kind {
            ActorKind::Food { points } | ActorKind::Score { points, .. } => points,
            _ => 0,
        }
    }

    /// Accumulate points on a score actor. Ignored by other kinds.
    pub fn add_points(&mut self, amount: u32) {
        if let ActorKind::Score { points, .. } = &mut self.kind {
            *points += amount;
        }
    }

    /// Relocate food to a random free cell and roll a new point value.
    ///
    /// The new cell is never the current one and never in `occupied`. If the field is full the
    /// food stays where it is.
    pub fn reset_food<R: Rng>(
        &mut self,
        rng: &mut R,
        occupied: &[Point],
        bounds: Bounds,
        cell_size: i32,
        max_points: u32,
    ) {
        let ActorKind::Food { points } = &mut self.kind else {
            return;
        };
        *points = rng.gen_range(1..=max_points.max(1));

        let columns = bounds.max_x / cell_size;
        let rows = bounds.max_y / cell_size;
        let free: Vec<Point> = (0..rows)
            .flat_map(|row| (0..columns).map(move |col| Point::new(col, row).scale(cell_size)))
            .filter(|cell| *cell != self.position && !occupied.contains(cell))
            .collect();

        if free.is_empty() {
            return;
        }
        self.position = free[rng.gen_range(0..free.len())];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_move_next_applies_velocity() {
        let bounds = Bounds::new(10, 10);
        let mut actor = Actor::segment(Point::new(2, 3), Point::new(1, 0), Color::RED, '#');
        actor.move_next(bounds);
        assert_eq!(actor.position, Point::new(3, 3));
    }

    #[test]
    fn test_move_next_wraps_every_kind() {
        let bounds = Bounds::new(10, 10);
        let mut actors = vec![
            Actor::segment(Point::new(9, 0), Point::new(1, 0), Color::RED, '@'),
            Actor::food(Point::new(0, 0), 3),
            Actor::score(Point::new(0, 0), Color::GREEN, "Green"),
            Actor::message(Point::new(5, 5), "hi"),
        ];
        actors[1].velocity = Point::new(0, -1);
        actors[2].velocity = Point::new(-1, 0);

        for actor in &mut actors {
            actor.move_next(bounds);
        }

        assert_eq!(actors[0].position, Point::new(0, 0));
        assert_eq!(actors[1].position, Point::new(0, 9));
        assert_eq!(actors[2].position, Point::new(9, 0));
        assert_eq!(actors[3].position, Point::new(5, 5));
    }

    #[test]
    fn test_text_per_kind() {
        let mut score = Actor::score(Point::ZERO, Color::RED, "Red");
        assert_eq!(score.text(), "Red: 0");
        score.add_points(4);
        assert_eq!(score.text(), "Red: 4");
        assert_eq!(score.points(), 4);

        assert_eq!(Actor::food(Point::ZERO, 2).text(), "@");
        assert_eq!(Actor::message(Point::ZERO, "Red Wins!").text(), "Red Wins!");
        assert_eq!(
            Actor::segment(Point::ZERO, Point::ZERO, Color::RED, SEGMENT_GLYPH).text(),
            "#"
        );
    }

    #[test]
    fn test_add_points_only_affects_scores() {
        let mut food = Actor::food(Point::ZERO, 2);
        food.add_points(10);
        assert_eq!(food.points(), 2);
    }

    #[test]
    fn test_reset_food_avoids_occupied_cells() {
        let bounds = Bounds::new(3, 3);
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: Vec<Point> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Point::new(x, y)))
            .filter(|p| *p != Point::new(2, 2))
            .collect();

        let mut food = Actor::food(Point::new(0, 0), 1);
        food.reset_food(&mut rng, &occupied, bounds, 1, 5);

        assert_eq!(food.position, Point::new(2, 2));
        assert!((1..=5).contains(&food.points()));
    }

    #[test]
    fn test_reset_food_always_moves() {
        let bounds = Bounds::new(4, 4);
        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Actor::food(Point::new(1, 1), 1);
        for _ in 0..50 {
            let before = food.position;
            food.reset_food(&mut rng, &[], bounds, 1, 3);
            assert_ne!(food.position, before);
        }
    }

    #[test]
    fn test_reset_food_respects_cell_size() {
        let bounds = Bounds::new(30, 30);
        let mut rng = StdRng::seed_from_u64(3);
        let mut food = Actor::food(Point::ZERO, 1);
        food.reset_food(&mut rng, &[], bounds, 15, 3);
        assert_eq!(food.position.x % 15, 0);
        assert_eq!(food.position.y % 15, 0);
    }
}
