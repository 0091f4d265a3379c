use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::grid::{Cell, Grid};

/// Errors raised when a simulation is misconfigured
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least 2, got {0}")]
    GridTooSmall(usize),
    #[error("start cell {start:?} lies outside a {size}x{size} grid")]
    StartOutOfBounds { start: Cell, size: usize },
    #[error("tick rate must be positive")]
    InvalidTickRate,
    #[error("body must contain at least one cell")]
    EmptyBody,
    #[error("body cell {0:?} appears more than once")]
    DuplicateBodyCell(Cell),
}

/// Which distance the biased edge cost compares a neighbour against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeCostReference {
    /// Compare against the head's distance when the search started.
    /// Every edge in a search shares the same reference distance.
    #[default]
    SearchStart,
    /// Compare against the distance of the node being expanded
    Predecessor,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square grid
    pub grid_size: usize,
    /// Where the single-cell snake starts
    pub start: Cell,
    /// Seed for food placement; `None` draws one from entropy
    pub seed: Option<u64>,
    /// Reference distance for the A* edge-cost penalty
    pub edge_cost: EdgeCostReference,
    /// Score gained on the turn food is eaten
    pub food_reward: i64,
    /// Score lost on every turn food is not eaten
    pub move_penalty: i64,
    /// Ticks per second for interactive drivers
    pub tick_rate_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            start: Cell::new(5, 5),
            seed: None,
            edge_cost: EdgeCostReference::SearchStart,
            food_reward: 100,
            move_penalty: 1,
            tick_rate_hz: 10,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self {
            start: Cell::new(2, 2),
            ..Self::new(6)
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }

    /// Reject configurations that cannot produce a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if !self.grid().contains(self.start) {
            return Err(ConfigError::StartOutOfBounds {
                start: self.start,
                size: self.grid_size,
            });
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        Ok(())
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }
}
