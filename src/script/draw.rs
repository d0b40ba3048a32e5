use anyhow::Result;

use crate::game::{Cast, Player};
use crate::render::VideoService;

/// Redraws the whole scene: food, red trail, green trail, scores, then messages on top
#[derive(Debug, Default)]
pub struct DrawActorsAction;

impl DrawActorsAction {
    pub fn new() -> Self {
        Self
    }

    pub fn execute<V: VideoService + ?Sized>(&self, cast: &Cast, video: &mut V) -> Result<()> {
        video.clear_buffer();
        video.draw_actor(cast.food());
        video.draw_actors(cast.cycle(Player::Red).segments(), false);
        video.draw_actors(cast.cycle(Player::Green).segments(), false);
        video.draw_actor(cast.score(Player::Red));
        video.draw_actor(cast.score(Player::Green));
        video.draw_actors(cast.messages(), true);
        video.flush_buffer()
    }
}
