use tracing::{debug, warn};

use crate::game::{Body, Cell, Direction, GameConfig, Grid, Snapshot};

use super::pathfinder::PathFinder;
use super::policy::{decide_direction, Decision};

/// The self-playing snake
///
/// State changes only through [`Agent::act`] and
/// [`Agent::update_performance`], once each per turn.
#[derive(Debug, Clone)]
pub struct Agent {
    body: Body,
    grid: Grid,
    score: i64,
    moves: u64,
    food_collected: u64,
    path_finder: PathFinder,
    food_reward: i64,
    move_penalty: i64,
}

impl Agent {
    /// Create a single-cell agent at the configured start
    pub fn new(config: &GameConfig) -> Self {
        Self::with_body(Body::new(config.start), config)
    }

    pub(crate) fn with_body(body: Body, config: &GameConfig) -> Self {
        Self {
            body,
            grid: config.grid(),
            score: 0,
            moves: 0,
            food_collected: 0,
            path_finder: PathFinder::new(config.edge_cost),
            food_reward: config.food_reward,
            move_penalty: config.move_penalty,
        }
    }

    /// Current head cell
    pub fn position(&self) -> Cell {
        self.body.head()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn food_collected(&self) -> u64 {
        self.food_collected
    }

    /// Capture what the agent can see this turn
    pub fn sense_environment(&self, food: Cell) -> Snapshot {
        Snapshot::new(self.body.clone(), food, self.grid)
    }

    /// Pick a direction and advance the head one cell.
    ///
    /// The body grows by one segment here; [`Agent::update_performance`]
    /// trims it back unless food was eaten. Returns `None` when every
    /// direction collides, leaving the agent untouched.
    pub fn act(&mut self, snapshot: &Snapshot) -> Option<Direction> {
        let path = self.path_finder.find_path(snapshot);
        let decision = decide_direction(snapshot, path.as_ref());

        match decision {
            Decision::FollowPath(direction) => {
                debug!(?direction, cost = ?path.as_ref().map(|p| p.cost), "Following path");
            }
            Decision::Fallback(direction) => {
                warn!(?direction, head = ?snapshot.head(), food = ?snapshot.food(), "No path to food, using fallback move");
            }
            Decision::NoMove => {
                debug!(head = ?snapshot.head(), "No collision-free move left");
            }
        }

        let direction = decision.direction()?;
        self.moves += 1;

        // Entering the tail cell briefly duplicates it until the tail is trimmed
        let new_head = self.position().step(direction);
        self.body.push_head(new_head);

        Some(direction)
    }

    /// Settle the turn: grow and score if food was eaten, otherwise trim the
    /// tail and pay the move penalty.
    pub fn update_performance(&mut self, food_eaten: bool) {
        if food_eaten {
            self.score += self.food_reward;
            self.food_collected += 1;
        } else {
            self.body.pop_tail();
            self.score -= self.move_penalty;
        }
    }
}
