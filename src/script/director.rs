use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};

use super::{ControlActorsAction, DrawActorsAction, HandleCollisionsAction, MoveActorsAction};
use crate::game::{Actor, Cast, Cycle, GameConfig, GameState, Player, Point};
use crate::input::KeyboardService;
use crate::render::VideoService;

/// Owns one round: the cast, the round state and the four frame actions.
///
/// Each `tick` runs input, movement, collisions and drawing in that order over the same cast.
pub struct Director {
    cast: Cast,
    state: GameState,
    control: ControlActorsAction,
    movement: MoveActorsAction,
    collisions: HandleCollisionsAction,
    draw: DrawActorsAction,
}

impl Director {
    /// Start a round. `config` is expected to have passed [`GameConfig::validate`].
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cast = build_cast(config, &mut rng);

        Self {
            cast,
            state: GameState::default(),
            control: ControlActorsAction::new(config.red_keys, config.green_keys, config.cell_size),
            movement: MoveActorsAction::new(),
            collisions: HandleCollisionsAction::new(rng, config.cell_size, config.max_food_points),
            draw: DrawActorsAction::new(),
        }
    }

    pub fn cast(&self) -> &Cast {
        &self.cast
    }

    pub fn cast_mut(&mut self) -> &mut Cast {
        &mut self.cast
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Run one frame
    pub fn tick<K, V>(&mut self, keyboard: &K, video: &mut V) -> Result<()>
    where
        K: KeyboardService + ?Sized,
        V: VideoService + ?Sized,
    {
        self.control.execute(&mut self.cast, keyboard);
        self.movement.execute(&mut self.cast);
        self.collisions.execute(&mut self.cast, &mut self.state);
        self.draw.execute(&self.cast, video)
    }
}

/// Lay out a fresh round: both cycles facing right on separate rows, scores along the top,
/// food on a random free cell
fn build_cast(config: &GameConfig, rng: &mut StdRng) -> Cast {
    let bounds = config.bounds();
    let cell = config.cell_size;
    let columns = config.grid_width as i32;
    let rows = config.grid_height as i32;
    let velocity = Point::new(cell, 0);

    let cycles = [Player::Red, Player::Green].map(|player| {
        let row = rows * (player.index() as i32 + 1) / 3;
        let head = Point::new(columns / 4, row).scale(cell);
        Cycle::new(
            head,
            velocity,
            config.initial_cycle_length,
            player.color(),
            bounds,
        )
    });

    let scores = [
        Actor::score(Point::new(1, 0).scale(cell), Player::Red.color(), Player::Red.name()),
        Actor::score(
            Point::new(columns / 2, 0).scale(cell),
            Player::Green.color(),
            Player::Green.name(),
        ),
    ];

    let mut food = Actor::food(Point::ZERO, 1);
    let occupied: Vec<Point> = cycles
        .iter()
        .flat_map(|cycle| cycle.segments().iter().map(|s| s.position))
        .collect();
    food.reset_food(rng, &occupied, bounds, cell, config.max_food_points);

    Cast::new(cycles, food, scores, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Color;
    use crate::script::draw::tests::RecordingVideo;
    use std::collections::HashSet;

    struct HeldKeys(HashSet<char>);

    impl KeyboardService for HeldKeys {
        fn is_key_down(&self, key: char) -> bool {
            self.0.contains(&key)
        }
    }

    fn no_keys() -> HeldKeys {
        HeldKeys(HashSet::new())
    }

    #[test]
    fn test_initial_scene() {
        let config = GameConfig::small();
        let director = Director::new(&config);
        let cast = director.cast();

        assert_eq!(director.state(), GameState::Playing);
        assert_eq!(cast.cycle(Player::Red).len(), 3);
        assert_eq!(cast.cycle(Player::Green).len(), 3);
        assert_eq!(cast.cycle(Player::Red).head().position, Point::new(5, 4));
        assert_eq!(cast.cycle(Player::Green).head().position, Point::new(5, 8));
        assert_eq!(cast.cycle(Player::Red).head().color, Color::RED);
        assert!(cast.messages().is_empty());
        assert!(!cast.occupied_cells().contains(&cast.food().position));
    }

    #[test]
    fn test_segments_start_on_distinct_cells() {
        let director = Director::new(&GameConfig::default());
        let cells: HashSet<Point> = director.cast().occupied_cells().into_iter().collect();
        assert_eq!(cells.len(), 16);
    }

    #[test]
    fn test_longest_valid_trail_fills_row_without_overlap() {
        let mut config = GameConfig::small();
        config.initial_cycle_length = config.grid_width;
        config.grid_height = 3;
        config.validate().unwrap();

        let director = Director::new(&config);

        let cells: HashSet<Point> = director.cast().occupied_cells().into_iter().collect();
        assert_eq!(cells.len(), 2 * config.grid_width);
        assert_eq!(director.cast().cycle(Player::Red).head().position.y, 1);
        assert_eq!(director.cast().cycle(Player::Green).head().position.y, 2);
    }

    #[test]
    fn test_tick_runs_full_pipeline() {
        let config = GameConfig::small();
        let mut director = Director::new(&config);
        let mut video = RecordingVideo::default();
        let keys = HeldKeys(['s'].into_iter().collect());

        director.tick(&keys, &mut video).unwrap();

        assert_eq!(director.cast().cycle(Player::Red).head().position, Point::new(5, 5));
        assert_eq!(director.cast().cycle(Player::Green).head().position, Point::new(6, 8));
        assert_eq!(video.calls.len(), 8);
    }

    #[test]
    fn test_quiet_rounds_stay_playing() {
        let mut config = GameConfig::small();
        config.grid_width = 30;
        let mut director = Director::new(&config);
        let mut video = RecordingVideo::default();

        // Park the food out of the way so nobody eats and trails never meet
        director.cast_mut().food_mut().position = Point::new(0, 11);
        for _ in 0..10 {
            director.tick(&no_keys(), &mut video).unwrap();
        }

        assert_eq!(director.state(), GameState::Playing);
        assert!(director.cast().messages().is_empty());
    }
}
