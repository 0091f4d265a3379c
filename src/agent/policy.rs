use crate::game::{valid_directions, Direction, Snapshot};

use super::pathfinder::Path;

/// How the direction for this turn was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// First step of the path to the food
    FollowPath(Direction),
    /// No path; first collision-free direction in enumeration order
    Fallback(Direction),
    /// Every direction collides
    NoMove,
}

impl Decision {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Decision::FollowPath(direction) | Decision::Fallback(direction) => Some(*direction),
            Decision::NoMove => None,
        }
    }
}

/// Choose the single step the head takes this turn
pub fn decide_direction(snapshot: &Snapshot, path: Option<&Path>) -> Decision {
    let along_path = path
        .and_then(|path| Some((path.cells.first().copied()?, path.next_cell()?)))
        .and_then(|(from, to)| Direction::from_delta(to.row - from.row, to.col - from.col));
    if let Some(direction) = along_path {
        return Decision::FollowPath(direction);
    }

    match valid_directions(snapshot.body(), snapshot.grid()).next() {
        Some(direction) => Decision::Fallback(direction),
        None => Decision::NoMove,
    }
}
