//! # maze_pathfinding
//!
//! A grid maze solver. Given a [PathingGrid] of walkable and blocked cells, a start and an end
//! [Position], it computes a route with one of four interchangeable strategies:
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search),
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a Manhattan heuristic.
//! Movement is 4-connected with unit cost.
//!
//! Every search produces a [SearchResult] which, besides the path, records the order in which
//! cells were explored so that a front-end can replay the search step by step (see [replay]).
//!
//! ```
//! use maze_pathfinding::{pathing_grid::PathingGrid, solve, validate, Position};
//!
//! let grid = PathingGrid::from_rows(&[vec![1, 1, 1], vec![0, 1, 0], vec![1, 1, 1]]).unwrap();
//! let (start, end) = (Position::new(0, 0), Position::new(2, 2));
//! validate(&grid, start, end).unwrap();
//! let result = solve(&grid, start, end, "bfs").unwrap();
//! assert!(result.path_found);
//! assert_eq!(result.path_length, 5);
//! ```
pub mod algorithm;
mod best_first;
pub mod error;
pub mod pathing_grid;
pub mod replay;
pub mod result;
pub mod solver;
pub mod validation;

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use algorithm::{algorithms, Algorithm, AlgorithmInfo};
pub use error::SearchError;
pub use pathing_grid::PathingGrid;
pub use result::SearchResult;
pub use validation::validate;

/// Inline capacity for neighbourhoods; a cell has at most 4 neighbours on a 4-grid.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Row and column offsets of the 4-neighbourhood in search order: right, down, left, up.
/// Every strategy breaks ties through this order.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A cell of the grid, addressed by row and column. Coordinates are signed so that
/// positions supplied by callers can be out of bounds and rejected by [validate].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(i32, i32)", into = "(i32, i32)"))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The four orthogonal neighbours in [NEIGHBOUR_OFFSETS] order, bounds not checked.
    pub fn neumann_neighborhood(&self) -> [Position; 4] {
        NEIGHBOUR_OFFSETS.map(|(dr, dc)| Position::new(self.row + dr, self.col + dc))
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Position {
        Position::new(row, col)
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> (i32, i32) {
        (p.row, p.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Number of unit moves along a path, 0 for an empty or single-cell path.
pub fn path_cost(path: &[Position]) -> usize {
    path.len().saturating_sub(1)
}

/// Runs the search named by `algorithm` (`bfs`, `dfs`, `dijkstra` or `astar`, case-insensitive)
/// from `start` to `end`. The inputs are expected to have passed [validate]; the engine does not
/// check them again. An unreachable end is not an error but a result with `path_found == false`.
pub fn solve(
    grid: &PathingGrid,
    start: Position,
    end: Position,
    algorithm: &str,
) -> Result<SearchResult, SearchError> {
    let algorithm: Algorithm = algorithm.parse()?;
    Ok(algorithm.solve(grid, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbourhood_order_is_right_down_left_up() {
        let p = Position::new(3, 3);
        assert_eq!(
            p.neumann_neighborhood(),
            [
                Position::new(3, 4),
                Position::new(4, 3),
                Position::new(3, 2),
                Position::new(2, 3)
            ]
        );
    }

    #[test]
    fn path_cost_counts_moves() {
        assert_eq!(path_cost(&[]), 0);
        assert_eq!(path_cost(&[Position::new(0, 0)]), 0);
        assert_eq!(path_cost(&[Position::new(0, 0), Position::new(0, 1)]), 1);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let grid = PathingGrid::new(2, 2, false);
        let start = Position::new(0, 0);
        let err = solve(&grid, start, start, "greedy").unwrap_err();
        assert_eq!(err, SearchError::UnknownAlgorithm("greedy".to_owned()));
    }

    #[test]
    fn selector_is_case_insensitive() {
        let grid = PathingGrid::new(2, 2, false);
        let result = solve(&grid, Position::new(0, 0), Position::new(1, 1), "AStar").unwrap();
        assert_eq!(result.algorithm, Algorithm::Astar);
        assert_eq!(result.path_length, 3);
    }
}
