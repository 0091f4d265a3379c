use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::game::{Environment, GameConfig, GameSummary, Status};

/// How a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessReport {
    pub summary: GameSummary,
    pub ticks: u64,
    pub status: Status,
}

/// Runs the simulation without a terminal UI, as fast as it will go
pub struct HeadlessMode {
    env: Environment,
    max_ticks: Option<u64>,
}

impl HeadlessMode {
    pub fn new(config: GameConfig, max_ticks: Option<u64>) -> Result<Self> {
        let env = Environment::new(config).context("Failed to create environment")?;
        Ok(Self { env, max_ticks })
    }

    /// Tick until the game ends or the tick cap is reached
    pub fn run(&mut self) -> HeadlessReport {
        while self.env.is_running() {
            if self.max_ticks.is_some_and(|cap| self.env.ticks() >= cap) {
                warn!(ticks = self.env.ticks(), "Tick limit reached before game over");
                break;
            }
            self.env.tick();
        }

        let report = HeadlessReport {
            summary: self.env.summary(),
            ticks: self.env.ticks(),
            status: self.env.status(),
        };
        info!(ticks = report.ticks, status = ?report.status, "Headless run finished");
        report
    }
}
