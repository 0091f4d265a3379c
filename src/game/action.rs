/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Every direction in the fixed enumeration order used for neighbour
    /// expansion and for the fallback move.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Returns the delta (d_row, d_col) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
        }
    }

    /// Inverse of [`Direction::delta`]; `None` for anything but a unit step
    pub fn from_delta(d_row: i32, d_col: i32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.delta() == (d_row, d_col))
    }
}
