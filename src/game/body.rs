use std::collections::{HashSet, VecDeque};

use super::config::ConfigError;
use super::grid::Cell;

/// The cells occupied by the snake, head first
///
/// A body is never empty and never holds the same cell twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    cells: VecDeque<Cell>,
}

impl Body {
    /// Create a single-cell body
    pub fn new(head: Cell) -> Self {
        Self {
            cells: VecDeque::from([head]),
        }
    }

    /// Build a body from head-first cells
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Result<Self, ConfigError> {
        let cells: VecDeque<Cell> = cells.into_iter().collect();
        if cells.is_empty() {
            return Err(ConfigError::EmptyBody);
        }

        let mut seen = HashSet::with_capacity(cells.len());
        if let Some(duplicate) = cells.iter().find(|cell| !seen.insert(**cell)) {
            return Err(ConfigError::DuplicateBodyCell(*duplicate));
        }

        Ok(Self { cells })
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; kept alongside `len`
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if any segment, tail included, occupies `cell`
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Check if `cell` is occupied by a segment other than the tail.
    ///
    /// The tail vacates its cell on the same turn the head advances, so it
    /// never blocks. For a single-cell body nothing blocks.
    pub fn blocks(&self, cell: Cell) -> bool {
        self.cells
            .iter()
            .take(self.cells.len() - 1)
            .any(|segment| *segment == cell)
    }

    /// Segments from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.cells.push_front(cell);
    }

    /// Drop the tail unless it is the only segment
    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        if self.cells.len() > 1 {
            self.cells.pop_back()
        } else {
            None
        }
    }
}
