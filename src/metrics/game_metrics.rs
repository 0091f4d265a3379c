use std::time::{Duration, Instant};

use crate::game::GameSummary;

/// Session-level figures kept across games by the drivers
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Best final score so far; scores can be negative, so `None` until a game ends
    pub best_score: Option<i64>,
    pub most_food: u64,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: None,
            most_food: 0,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, summary: GameSummary) {
        self.games_played += 1;
        self.best_score = Some(
            self.best_score
                .map_or(summary.score, |best| best.max(summary.score)),
        );
        self.most_food = self.most_food.max(summary.food_collected);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }

    pub fn format_best_score(&self) -> String {
        self.best_score
            .map_or_else(|| "-".to_string(), |score| score.to_string())
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
