use anyhow::Result;
use cycles::game::{Actor, Color, GameConfig, GameState, Player, Point};
use cycles::input::KeyboardService;
use cycles::render::VideoService;
use cycles::script::Director;
use std::collections::HashSet;

struct HeldKeys(HashSet<char>);

impl HeldKeys {
    fn new(keys: &[char]) -> Self {
        Self(keys.iter().copied().collect())
    }
}

impl KeyboardService for HeldKeys {
    fn is_key_down(&self, key: char) -> bool {
        self.0.contains(&key)
    }
}

/// Counts frames and keeps the last message batch
#[derive(Default)]
struct FrameCounter {
    calls: usize,
    flushes: usize,
    last_messages: Vec<String>,
}

impl VideoService for FrameCounter {
    fn clear_buffer(&mut self) {
        self.calls += 1;
    }

    fn draw_actor(&mut self, _actor: &Actor) {
        self.calls += 1;
    }

    fn draw_actors(&mut self, actors: &[Actor], centered: bool) {
        self.calls += 1;
        if centered {
            self.last_messages = actors.iter().map(Actor::text).collect();
        }
    }

    fn flush_buffer(&mut self) -> Result<()> {
        self.calls += 1;
        self.flushes += 1;
        Ok(())
    }
}

fn config() -> GameConfig {
    GameConfig {
        initial_cycle_length: 6,
        ..GameConfig::small()
    }
}

fn director() -> Director {
    let mut director = Director::new(&config());
    // Keep the food off both paths
    director.cast_mut().food_mut().position = Point::new(19, 11);
    director
}

#[test]
fn test_red_drives_into_green_trail() {
    let mut director = director();
    let mut video = FrameCounter::default();
    let keys = HeldKeys::new(&['s']);

    for _ in 0..3 {
        director.tick(&keys, &mut video).unwrap();
        assert_eq!(director.state(), GameState::Playing);
        assert!(director.cast().messages().is_empty());
    }

    // Red comes down column 5 onto green's trail in row 8
    director.tick(&keys, &mut video).unwrap();

    assert_eq!(director.cast().cycle(Player::Red).head().position, Point::new(5, 8));
    assert_eq!(director.state(), GameState::GameOver { winner: Player::Green });
    assert_eq!(video.last_messages, vec!["Green Wins!".to_string()]);
    assert_eq!(video.calls, 4 * 8);

    let cast = director.cast();
    assert!(cast.cycle(Player::Red).segments().iter().all(|s| s.color == Color::WHITE));
    assert!(cast.cycle(Player::Green).segments().iter().all(|s| s.color == Color::GREEN));
    assert_eq!(cast.food().color, Color::WHITE);
}

#[test]
fn test_play_freezes_but_movement_continues_after_game_over() {
    let mut director = director();
    let mut video = FrameCounter::default();
    let keys = HeldKeys::new(&['s']);
    for _ in 0..4 {
        director.tick(&keys, &mut video).unwrap();
    }
    assert!(director.state().is_game_over());

    for step in 1..=3 {
        director.tick(&HeldKeys::new(&[]), &mut video).unwrap();
        assert_eq!(
            director.cast().cycle(Player::Red).head().position,
            Point::new(5, 8 + step)
        );
    }

    let cast = director.cast();
    assert_eq!(cast.messages().len(), 1);
    assert_eq!(cast.score(Player::Red).points(), 0);
    assert_eq!(cast.score(Player::Green).points(), 0);
    assert!(cast.cycle(Player::Red).segments().iter().all(|s| s.color == Color::WHITE));
    assert_eq!(director.state().winner(), Some(Player::Green));
    assert_eq!(video.flushes, 7);
}

#[test]
fn test_red_picks_up_food() {
    let mut director = director();
    let mut video = FrameCounter::default();
    director.cast_mut().food_mut().position = Point::new(6, 4);
    let points = director.cast().food().points();

    director.tick(&HeldKeys::new(&[]), &mut video).unwrap();

    let cast = director.cast();
    assert_eq!(cast.score(Player::Red).points(), points);
    assert_eq!(cast.score(Player::Green).points(), 0);
    assert_eq!(cast.cycle(Player::Red).len(), 6 + points as usize);
    assert_ne!(cast.food().position, Point::new(6, 4));
    assert_eq!(director.state(), GameState::Playing);
}
