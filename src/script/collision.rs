use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::game::{Actor, Cast, Color, GameState, Group, Player};

/// Resolves food pickups and trail crashes, and ends the round.
///
/// Does nothing once `state` reports the round is over, so the game-over banner and the
/// recoloring happen exactly once.
pub struct HandleCollisionsAction {
    rng: StdRng,
    cell_size: i32,
    max_food_points: u32,
}

impl HandleCollisionsAction {
    pub fn new(rng: StdRng, cell_size: i32, max_food_points: u32) -> Self {
        Self {
            rng,
            cell_size,
            max_food_points,
        }
    }

    pub fn execute(&mut self, cast: &mut Cast, state: &mut GameState) {
        if state.is_game_over() {
            return;
        }
        self.handle_food_collision(cast);
        if let Some(winner) = self.handle_segment_collision(cast) {
            state.finish(winner);
            self.handle_game_over(cast, winner);
        }
    }

    /// Red is checked first, so red takes the pellet when both heads reach it together
    fn handle_food_collision(&mut self, cast: &mut Cast) {
        let food_position = cast.food().position;
        let Some(player) = Player::ALL
            .into_iter()
            .find(|player| cast.cycle(*player).head().position == food_position)
        else {
            return;
        };

        let points = cast.food().points();
        cast.cycle_mut(player).grow_tail(points as usize);
        cast.score_mut(player).add_points(points);

        let occupied = cast.occupied_cells();
        let bounds = cast.bounds();
        cast.food_mut().reset_food(
            &mut self.rng,
            &occupied,
            bounds,
            self.cell_size,
            self.max_food_points,
        );
        debug!(
            player = player.name(),
            points,
            score = cast.score(player).points(),
            "food eaten"
        );
    }

    /// Returns the winner if any head landed on a trail this frame. When several crashes happen
    /// at once the last one checked decides.
    fn handle_segment_collision(&self, cast: &Cast) -> Option<Player> {
        let red = cast.cycle(Player::Red);
        let green = cast.cycle(Player::Green);
        let red_head = red.head().position;
        let green_head = green.head().position;
        let mut winner = None;

        for segment in red.body() {
            if green_head == segment.position {
                winner = Some(Player::Red);
            } else if red_head == segment.position {
                winner = Some(Player::Green);
            }
        }

        for segment in green.body() {
            if red_head == segment.position {
                winner = Some(Player::Green);
            } else if green_head == segment.position {
                winner = Some(Player::Red);
            }
        }

        winner
    }

    fn handle_game_over(&self, cast: &mut Cast, winner: Player) {
        let position = cast.bounds().center();
        let text = format!("{} Wins!", winner.name());
        info!(winner = winner.name(), "game over");

        cast.add_actor(Group::Messages, Actor::message(position, text));
        cast.cycle_mut(winner.opponent()).paint(Color::WHITE);
        cast.food_mut().color = Color::WHITE;
    }
}
