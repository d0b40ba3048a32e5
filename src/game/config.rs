use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::point::Bounds;

/// Keys that steer one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerKeys {
    pub left: char,
    pub right: char,
    pub up: char,
    pub down: char,
}

impl PlayerKeys {
    pub const fn new(left: char, right: char, up: char, down: char) -> Self {
        Self {
            left,
            right,
            up,
            down,
        }
    }

    pub fn all(&self) -> [char; 4] {
        [self.left, self.right, self.up, self.down]
    }

    /// Short label for the controls footer, e.g. "WASD"
    pub fn label(&self) -> String {
        [self.up, self.left, self.down, self.right]
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}

/// Keys the shell keeps for itself
const RESERVED_KEYS: [char; 2] = ['q', 'r'];

/// Smallest playable field: room for both starting rows and a trail
const MIN_GRID_WIDTH: usize = 4;
const MIN_GRID_HEIGHT: usize = 3;
const MAX_FRAME_RATE: u32 = 1000;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Units per cell; velocities are one cell per tick
    pub cell_size: i32,
    /// Segments each cycle starts with
    pub initial_cycle_length: usize,
    /// Upper bound for a food pellet's random point value
    pub max_food_points: u32,
    /// Game ticks per second
    pub frame_rate: u32,
    /// Fixed seed for food placement, random when absent
    pub seed: Option<u64>,
    pub red_keys: PlayerKeys,
    pub green_keys: PlayerKeys,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 20,
            cell_size: 1,
            initial_cycle_length: 8,
            max_food_points: 5,
            frame_rate: 10,
            seed: None,
            red_keys: PlayerKeys::new('a', 'd', 'w', 's'),
            green_keys: PlayerKeys::new('j', 'l', 'i', 'k'),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self {
            initial_cycle_length: 3,
            seed: Some(0),
            ..Self::new(20, 12)
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Reject settings the game cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width >= MIN_GRID_WIDTH && self.grid_height >= MIN_GRID_HEIGHT,
            "grid must be at least {}x{}, got {}x{}",
            MIN_GRID_WIDTH,
            MIN_GRID_HEIGHT,
            self.grid_width,
            self.grid_height
        );
        ensure!(self.cell_size >= 1, "cell_size must be at least 1, got {}", self.cell_size);
        ensure!(
            (1..=self.grid_width).contains(&self.initial_cycle_length),
            "initial_cycle_length must be between 1 and the grid width ({}), got {}",
            self.grid_width,
            self.initial_cycle_length
        );
        ensure!(
            (1..=MAX_FRAME_RATE).contains(&self.frame_rate),
            "frame_rate must be between 1 and {}, got {}",
            MAX_FRAME_RATE,
            self.frame_rate
        );
        ensure!(self.max_food_points >= 1, "max_food_points must be at least 1");

        let mut seen = Vec::with_capacity(8);
        for key in self.red_keys.all().into_iter().chain(self.green_keys.all()) {
            let key = key.to_ascii_lowercase();
            ensure!(
                !RESERVED_KEYS.contains(&key),
                "'{}' is reserved for quit/restart and cannot steer",
                key
            );
            ensure!(!seen.contains(&key), "'{}' is bound to more than one move", key);
            seen.push(key);
        }
        Ok(())
    }

    /// Field extent in position units
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.grid_width as i32 * self.cell_size,
            self.grid_height as i32 * self.cell_size,
        )
    }
}
