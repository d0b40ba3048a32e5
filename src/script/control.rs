use crate::game::{Cast, Direction, Player, PlayerKeys};
use crate::input::KeyboardService;

/// Turns held keys into head turns for both cycles.
///
/// Each player's last chosen direction is kept between frames, so a cycle keeps going the way it
/// was last pointed when nobody touches the keyboard.
pub struct ControlActorsAction {
    keys: [PlayerKeys; 2],
    directions: [Direction; 2],
    cell_size: i32,
}

impl ControlActorsAction {
    pub fn new(red_keys: PlayerKeys, green_keys: PlayerKeys, cell_size: i32) -> Self {
        Self {
            keys: [red_keys, green_keys],
            directions: [Direction::Right; 2],
            cell_size,
        }
    }

    pub fn direction(&self, player: Player) -> Direction {
        self.directions[player.index()]
    }

    pub fn execute<K: KeyboardService + ?Sized>(&mut self, cast: &mut Cast, keyboard: &K) {
        for player in Player::ALL {
            let keys = self.keys[player.index()];
            let direction = &mut self.directions[player.index()];

            // Later checks win when several keys are held
            if keyboard.is_key_down(keys.left) {
                *direction = Direction::Left;
            }
            if keyboard.is_key_down(keys.right) {
                *direction = Direction::Right;
            }
            if keyboard.is_key_down(keys.up) {
                *direction = Direction::Up;
            }
            if keyboard.is_key_down(keys.down) {
                *direction = Direction::Down;
            }
        }

        for player in Player::ALL {
            let velocity = self.directions[player.index()].velocity(self.cell_size);
            cast.cycle_mut(player).turn_head(velocity);
        }
    }
}
