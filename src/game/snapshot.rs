use super::body::Body;
use super::grid::{Cell, Grid};

/// Read-only view of the board handed to the agent each turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    head: Cell,
    body: Body,
    food: Cell,
    grid: Grid,
}

impl Snapshot {
    pub fn new(body: Body, food: Cell, grid: Grid) -> Self {
        Self {
            head: body.head(),
            body,
            food,
            grid,
        }
    }

    pub fn head(&self) -> Cell {
        self.head
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }
}
