//! A* search from the snake's head to the food
//!
//! Neighbours are admitted through the collision model and edges are priced
//! by a distance-biased cost: stepping to a cell that is farther from the
//! food than the reference distance costs [`DETOUR_COST`], every other step
//! costs [`STEP_COST`]. The heuristic is the Manhattan distance to the food,
//! which never overestimates because every edge costs at least one.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::game::{is_valid_move, Cell, Direction, EdgeCostReference, Snapshot};

/// Cost of a step that does not move away from the food
pub const STEP_COST: f64 = 1.0;
/// Cost of a step that moves away from the food
pub const DETOUR_COST: f64 = 1.5;

/// Cells from the head (inclusive) to the food (inclusive)
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub cells: Vec<Cell>,
    /// Sum of edge costs along the path
    pub cost: f64,
}

impl Path {
    /// Number of cells, endpoints included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell the head should move into next
    pub fn next_cell(&self) -> Option<Cell> {
        self.cells.get(1).copied()
    }
}

/// Open-set entry. `BinaryHeap` is a max-heap, so the ordering is reversed:
/// lower f pops first, and equal f pops the smaller cell (row, then col).
#[derive(Debug, Clone, Copy)]
struct OpenNode {
    f_score: f64,
    g_score: f64,
    cell: Cell,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* path finder with a configurable edge-cost reference
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder {
    edge_cost: EdgeCostReference,
}

impl PathFinder {
    pub fn new(edge_cost: EdgeCostReference) -> Self {
        Self { edge_cost }
    }

    pub fn edge_cost(&self) -> EdgeCostReference {
        self.edge_cost
    }

    /// Price the edge `from -> to` during a search over `snapshot`
    pub fn action_cost(&self, snapshot: &Snapshot, from: Cell, to: Cell) -> f64 {
        let goal = snapshot.food();
        let reference = match self.edge_cost {
            EdgeCostReference::SearchStart => snapshot.head(),
            EdgeCostReference::Predecessor => from,
        };

        if to.manhattan_distance(goal) > reference.manhattan_distance(goal) {
            DETOUR_COST
        } else {
            STEP_COST
        }
    }

    /// Find a minimum-cost path from the head to the food.
    ///
    /// Returns `None` when the food cannot be reached, which is an ordinary
    /// outcome (for instance when the body walls the food off).
    pub fn find_path(&self, snapshot: &Snapshot) -> Option<Path> {
        let start = snapshot.head();
        let goal = snapshot.food();
        let body = snapshot.body();
        let grid = snapshot.grid();

        let mut open_set = BinaryHeap::new();
        let mut came_from: HashMap<Cell, Cell> = HashMap::new();
        let mut g_score: HashMap<Cell, f64> = HashMap::new();

        g_score.insert(start, 0.0);
        open_set.push(OpenNode {
            f_score: heuristic(start, goal),
            g_score: 0.0,
            cell: start,
        });

        while let Some(OpenNode {
            g_score: popped_g,
            cell: current,
            ..
        }) = open_set.pop()
        {
            if current == goal {
                return Some(reconstruct_path(&came_from, current, popped_g));
            }

            let current_g = g_score.get(&current).copied().unwrap_or(f64::INFINITY);
            // Superseded by a cheaper entry that was already expanded
            if popped_g > current_g {
                continue;
            }

            for direction in Direction::ALL {
                let neighbor = current.step(direction);
                if !is_valid_move(neighbor, body, grid) {
                    continue;
                }

                let tentative_g = current_g + self.action_cost(snapshot, current, neighbor);
                let improved = g_score
                    .get(&neighbor)
                    .map_or(true, |&known| tentative_g < known);

                if improved {
                    came_from.insert(neighbor, current);
                    g_score.insert(neighbor, tentative_g);
                    open_set.push(OpenNode {
                        f_score: tentative_g + heuristic(neighbor, goal),
                        g_score: tentative_g,
                        cell: neighbor,
                    });
                }
            }
        }

        None
    }
}

fn heuristic(cell: Cell, goal: Cell) -> f64 {
    f64::from(cell.manhattan_distance(goal))
}

fn reconstruct_path(came_from: &HashMap<Cell, Cell>, goal: Cell, cost: f64) -> Path {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        cells.push(previous);
        current = previous;
    }
    cells.reverse();

    Path { cells, cost }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Body, Grid};

    fn snapshot(body: &[(i32, i32)], food: (i32, i32), size: usize) -> Snapshot {
        let body = Body::from_cells(body.iter().map(|&(row, col)| Cell::new(row, col))).unwrap();
        Snapshot::new(body, Cell::new(food.0, food.1), Grid::new(size))
    }

    fn assert_contiguous(path: &Path) {
        for pair in path.cells.windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1, "{:?}", path.cells);
        }
    }

    #[test]
    fn test_straight_line_path() {
        let snapshot = snapshot(&[(1, 1)], (1, 3), 4);

        for reference in [EdgeCostReference::SearchStart, EdgeCostReference::Predecessor] {
            let path = PathFinder::new(reference).find_path(&snapshot).unwrap();
            assert_eq!(
                path.cells,
                vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3)]
            );
            assert_eq!(path.cost, 2.0);
        }
    }

    #[test]
    fn test_empty_grid_path_matches_manhattan_distance() {
        let finder = PathFinder::default();
        let cases = [((0, 0), (7, 7)), ((5, 5), (0, 9)), ((9, 0), (0, 0)), ((3, 8), (3, 1))];

        for (start, food) in cases {
            let snapshot = snapshot(&[start], food, 10);
            let distance = snapshot.head().manhattan_distance(snapshot.food());
            let path = finder.find_path(&snapshot).unwrap();

            assert_eq!(path.len(), distance as usize + 1);
            assert_eq!(path.cost, f64::from(distance));
            assert_eq!(path.cells.first(), Some(&snapshot.head()));
            assert_eq!(path.cells.last(), Some(&snapshot.food()));
            assert_contiguous(&path);
        }
    }

    #[test]
    fn test_detour_costs_depend_on_reference() {
        // (0,2) and (1,2) wall off the direct route; the tail at (4,4) does not block
        let snapshot = snapshot(&[(0, 0), (0, 2), (1, 2), (4, 4)], (0, 3), 5);

        let literal = PathFinder::new(EdgeCostReference::SearchStart)
            .find_path(&snapshot)
            .unwrap();
        assert_eq!(literal.len(), 8);
        assert_eq!(literal.cost, 7.5);
        assert_contiguous(&literal);

        let corrected = PathFinder::new(EdgeCostReference::Predecessor)
            .find_path(&snapshot)
            .unwrap();
        assert_eq!(corrected.len(), 8);
        assert_eq!(corrected.cost, 8.0);
        assert_contiguous(&corrected);
    }

    #[test]
    fn test_action_cost() {
        let snapshot = snapshot(&[(2, 2)], (2, 4), 6);
        let literal = PathFinder::new(EdgeCostReference::SearchStart);
        let corrected = PathFinder::new(EdgeCostReference::Predecessor);

        // Toward the food
        assert_eq!(literal.action_cost(&snapshot, Cell::new(2, 2), Cell::new(2, 3)), STEP_COST);
        // Away from the food
        assert_eq!(literal.action_cost(&snapshot, Cell::new(2, 2), Cell::new(2, 1)), DETOUR_COST);
        // Away from the predecessor, but no farther than the head started
        assert_eq!(literal.action_cost(&snapshot, Cell::new(2, 3), Cell::new(1, 3)), STEP_COST);
        assert_eq!(
            corrected.action_cost(&snapshot, Cell::new(2, 3), Cell::new(1, 3)),
            DETOUR_COST
        );
    }

    #[test]
    fn test_path_never_enters_blocking_segments() {
        let body = [(2, 1), (2, 2), (2, 3), (1, 3), (0, 3)];
        let snapshot = snapshot(&body, (3, 2), 5);
        let path = PathFinder::default().find_path(&snapshot).unwrap();

        for cell in &path.cells[1..] {
            assert!(!snapshot.body().blocks(*cell));
        }
        assert_contiguous(&path);
    }

    #[test]
    fn test_enclosed_food_has_no_path() {
        let body = [(2, 1), (2, 0), (1, 0), (1, 1), (0, 1), (0, 2)];
        let snapshot = snapshot(&body, (0, 0), 4);
        assert_eq!(PathFinder::default().find_path(&snapshot), None);
    }

    #[test]
    fn test_search_is_deterministic() {
        let snapshot = snapshot(&[(4, 4), (4, 5), (5, 5)], (0, 0), 8);
        let finder = PathFinder::default();
        let first = finder.find_path(&snapshot).unwrap();

        for _ in 0..10 {
            assert_eq!(finder.find_path(&snapshot).unwrap(), first);
        }
    }

    #[test]
    fn test_open_node_ordering() {
        let node = |f_score, row, col| OpenNode {
            f_score,
            g_score: 0.0,
            cell: Cell::new(row, col),
        };

        let mut heap = BinaryHeap::new();
        heap.push(node(3.0, 0, 0));
        heap.push(node(2.0, 1, 1));
        heap.push(node(2.0, 0, 5));
        heap.push(node(2.5, 0, 0));

        let order: Vec<Cell> = std::iter::from_fn(|| heap.pop().map(|n| n.cell)).collect();
        assert_eq!(
            order,
            vec![Cell::new(0, 5), Cell::new(1, 1), Cell::new(0, 0), Cell::new(0, 0)]
        );
    }
}
