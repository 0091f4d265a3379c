use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the game grid, addressed by (row, col)
///
/// Ordering is row first, then column. The path finder relies on this
/// ordering to break ties between equally promising cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move cell by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Neighbouring cell one step in `direction`
    pub fn step(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.moved_by(d_row, d_col)
    }

    /// |Δrow| + |Δcol|
    pub fn manhattan_distance(&self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Square grid of `size` x `size` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.size * self.size
    }

    /// Check if a cell lies within [0, size) on both axes
    pub fn contains(&self, cell: Cell) -> bool {
        let size = self.size as i64;
        (0..size).contains(&(cell.row as i64)) && (0..size).contains(&(cell.col as i64))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_ordering_is_row_then_col() {
        assert!(Cell::new(0, 5) < Cell::new(1, 0));
        assert!(Cell::new(2, 1) < Cell::new(2, 3));
        assert_eq!(Cell::new(3, 3).cmp(&Cell::new(3, 3)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_cell_step() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.step(Direction::Right), Cell::new(5, 6));
        assert_eq!(cell.step(Direction::Left), Cell::new(5, 4));
        assert_eq!(cell.step(Direction::Down), Cell::new(6, 5));
        assert_eq!(cell.step(Direction::Up), Cell::new(4, 5));
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Cell::new(1, 1).manhattan_distance(Cell::new(1, 3)), 2);
        assert_eq!(Cell::new(0, 0).manhattan_distance(Cell::new(3, 4)), 7);
        assert_eq!(Cell::new(3, 4).manhattan_distance(Cell::new(0, 0)), 7);
        assert_eq!(Cell::new(2, 2).manhattan_distance(Cell::new(2, 2)), 0);
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20);

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(19, 19)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(20, 0)));
        assert!(!grid.contains(Cell::new(0, 20)));
    }

    #[test]
    fn test_cells_enumeration() {
        let grid = Grid::new(3);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.area());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(0, 1));
        assert_eq!(cells[8], Cell::new(2, 2));
    }
}
