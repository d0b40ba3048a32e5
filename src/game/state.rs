use super::direction::Player;

/// Where the current round stands. Once `GameOver` it never returns to `Playing` within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Playing,
    GameOver { winner: Player },
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameState::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Playing => None,
            GameState::GameOver { winner } => Some(*winner),
        }
    }

    /// Latch the round as won by `winner`. Returns false if it was already over.
    pub fn finish(&mut self, winner: Player) -> bool {
        if self.is_game_over() {
            return false;
        }
        *self = GameState::GameOver { winner };
        true
    }
}
