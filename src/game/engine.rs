use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{
    action::Direction,
    body::Body,
    config::{ConfigError, GameConfig},
    grid::{Cell, Grid},
};
use crate::agent::Agent;

/// Rejection samples drawn before falling back to scanning for free cells
const FOOD_SAMPLE_ATTEMPTS: usize = 64;

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Every direction from the head collides
    NoMove,
    /// The body covers the whole grid, so no food can be placed
    BoardFull,
}

/// Turn-driver state. `GameOver` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver(GameOverReason),
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Direction taken, `None` if the agent could not move
    pub direction: Option<Direction>,
    /// Whether the head landed on the food
    pub food_eaten: bool,
    /// Whether the game is over after this tick
    pub terminal: bool,
}

impl TickOutcome {
    fn game_over() -> Self {
        Self {
            direction: None,
            food_eaten: false,
            terminal: true,
        }
    }
}

/// Final figures surfaced to whoever drives the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: i64,
    pub food_collected: u64,
    pub moves: u64,
}

/// Owns the food and the agent and runs the turn sequence:
/// sense, decide and move, check for food, settle the turn, check for the end.
pub struct Environment {
    config: GameConfig,
    agent: Agent,
    food: Cell,
    status: Status,
    ticks: u64,
    rng: SmallRng,
}

impl Environment {
    /// Create a new environment, failing fast on a bad configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let agent = Agent::new(&config);

        Self::with_agent(config, agent, rng)
    }

    fn with_agent(config: GameConfig, agent: Agent, mut rng: SmallRng) -> Result<Self, ConfigError> {
        let food = spawn_food(&mut rng, agent.body(), config.grid_size)
            .ok_or(ConfigError::GridTooSmall(config.grid_size))?;

        info!(
            grid_size = config.grid_size,
            start = ?agent.position(),
            ?food,
            edge_cost = ?config.edge_cost,
            "Environment ready"
        );

        Ok(Self {
            config,
            agent,
            food,
            status: Status::Running,
            ticks: 0,
            rng,
        })
    }

    /// Start a new game with a fresh agent, continuing the same RNG stream
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        let agent = Agent::new(&self.config);
        self.food = spawn_food(&mut self.rng, agent.body(), self.config.grid_size)
            .ok_or(ConfigError::GridTooSmall(self.config.grid_size))?;
        self.agent = agent;
        self.status = Status::Running;
        self.ticks = 0;
        Ok(())
    }

    /// Run one complete turn. Once the game is over this does nothing.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != Status::Running {
            return TickOutcome::game_over();
        }

        let snapshot = self.agent.sense_environment(self.food);
        let Some(direction) = self.agent.act(&snapshot) else {
            self.finish(GameOverReason::NoMove);
            return TickOutcome::game_over();
        };
        self.ticks += 1;

        let food_eaten = self.agent.position() == self.food;
        let mut terminal = false;

        if food_eaten {
            match self.generate_food() {
                Some(food) => {
                    info!(eaten = ?self.food, next = ?food, length = self.agent.body().len(), "Food eaten");
                    self.food = food;
                }
                None => terminal = true,
            }
        }

        self.agent.update_performance(food_eaten);

        debug!(
            tick = self.ticks,
            ?direction,
            food_eaten,
            score = self.agent.score(),
            "Tick complete"
        );

        if terminal {
            self.finish(GameOverReason::BoardFull);
        }

        TickOutcome {
            direction: Some(direction),
            food_eaten,
            terminal,
        }
    }

    /// Pick a uniformly random cell outside the body, or `None` if the body
    /// fills the grid.
    pub fn generate_food(&mut self) -> Option<Cell> {
        spawn_food(&mut self.rng, self.agent.body(), self.config.grid_size)
    }

    fn finish(&mut self, reason: GameOverReason) {
        self.status = Status::GameOver(reason);
        let summary = self.summary();
        info!(
            ?reason,
            score = summary.score,
            food_collected = summary.food_collected,
            moves = summary.moves,
            "Game over"
        );
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn body(&self) -> &Body {
        self.agent.body()
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> i64 {
        self.agent.score()
    }

    pub fn moves(&self) -> u64 {
        self.agent.moves()
    }

    pub fn food_collected(&self) -> u64 {
        self.agent.food_collected()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Completed turns in the current game
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.agent.score(),
            food_collected: self.agent.food_collected(),
            moves: self.agent.moves(),
        }
    }
}

/// Spawn food at a random empty position
fn spawn_food(rng: &mut SmallRng, body: &Body, grid_size: usize) -> Option<Cell> {
    for _ in 0..FOOD_SAMPLE_ATTEMPTS {
        let row = rng.gen_range(0..grid_size) as i32;
        let col = rng.gen_range(0..grid_size) as i32;
        let cell = Cell::new(row, col);

        if !body.contains(cell) {
            return Some(cell);
        }
    }

    // Crowded board: choose among the cells that are actually free
    let free: Vec<Cell> = Grid::new(grid_size)
        .cells()
        .filter(|cell| !body.contains(*cell))
        .collect();
    free.choose(rng).copied()
}

#[cfg(test)]
impl Environment {
    pub(crate) fn from_parts(config: GameConfig, agent: Agent, food: Cell) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(config.seed.unwrap_or(0)),
            config,
            agent,
            food,
            status: Status::Running,
            ticks: 0,
        }
    }
}
