use std::time::{Duration, Instant};

use crate::game::Player;

/// Round timer and running tally across restarts
pub struct MatchMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub rounds_played: u32,
    pub wins: [u32; 2],
    round_over: bool,
}

impl MatchMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            rounds_played: 0,
            wins: [0; 2],
            round_over: false,
        }
    }

    /// Advance the round clock. Stops once the round is decided.
    pub fn update(&mut self) {
        if !self.round_over {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_round_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.round_over = false;
    }

    /// Record a finished round. Only the first call per round counts.
    pub fn on_round_over(&mut self, winner: Player) {
        if self.round_over {
            return;
        }
        self.round_over = true;
        self.rounds_played += 1;
        self.wins[winner.index()] += 1;
    }

    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for MatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}
