use super::action::Direction;
use super::body::Body;
use super::grid::{Cell, Grid};

/// Check whether the head may enter `candidate` this turn.
///
/// The candidate must be inside the grid and must not be a body segment
/// other than the tail.
pub fn is_valid_move(candidate: Cell, body: &Body, grid: Grid) -> bool {
    grid.contains(candidate) && !body.blocks(candidate)
}

/// Directions the head can take without colliding, in enumeration order
pub fn valid_directions(body: &Body, grid: Grid) -> impl Iterator<Item = Direction> + '_ {
    let head = body.head();
    Direction::ALL
        .into_iter()
        .filter(move |direction| is_valid_move(head.step(*direction), body, grid))
}
