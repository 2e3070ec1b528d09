//! The algorithm selector and the catalog front-ends use to list the available strategies.

use core::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::pathing_grid::PathingGrid;
use crate::result::SearchResult;
use crate::solver::{
    astar::AstarSolver, bfs::BfsSolver, dfs::DfsSolver, dijkstra::DijkstraSolver, GridSolver,
};
use crate::Position;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
}

/// Display metadata for one algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    /// Whether the returned path is guaranteed to be a shortest one.
    pub optimal: bool,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Astar,
    ];

    /// The selector string accepted by [solve](crate::solve).
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Astar => "astar",
        }
    }

    pub fn info(&self) -> AlgorithmInfo {
        let (display_name, description, time_complexity, optimal) = match self {
            Algorithm::Bfs => (
                "Breadth-First Search",
                "Guarantees shortest path, explores level by level",
                "O(V + E)",
                true,
            ),
            Algorithm::Dfs => (
                "Depth-First Search",
                "Explores as far as possible before backtracking",
                "O(V + E)",
                false,
            ),
            Algorithm::Dijkstra => (
                "Dijkstra's Algorithm",
                "Shortest path with weighted edges (all weights = 1 here)",
                "O(V log V + E)",
                true,
            ),
            Algorithm::Astar => (
                "A* Search",
                "Heuristic-based shortest path using Manhattan distance",
                "O(V log V)",
                true,
            ),
        };
        AlgorithmInfo {
            name: self.name(),
            display_name,
            description,
            time_complexity,
            optimal,
        }
    }

    /// Runs this algorithm with its default settings.
    pub fn solve(&self, grid: &PathingGrid, start: Position, end: Position) -> SearchResult {
        match self {
            Algorithm::Bfs => BfsSolver.solve(grid, start, end),
            Algorithm::Dfs => DfsSolver.solve(grid, start, end),
            Algorithm::Dijkstra => DijkstraSolver.solve(grid, start, end),
            Algorithm::Astar => AstarSolver::new().solve(grid, start, end),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Algorithm, SearchError> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::UnknownAlgorithm(s.to_owned()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The catalog of every supported algorithm, in selector order.
pub fn algorithms() -> Vec<AlgorithmInfo> {
    Algorithm::ALL.iter().map(Algorithm::info).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_name() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.to_string().to_uppercase().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(
            "a*".parse::<Algorithm>(),
            Err(SearchError::UnknownAlgorithm("a*".to_owned()))
        );
    }

    #[test]
    fn catalog_lists_four_algorithms() {
        let catalog = algorithms();
        let names: Vec<&str> = catalog.iter().map(|a| a.name).collect();
        assert_eq!(names, ["bfs", "dfs", "dijkstra", "astar"]);
        let optimal: Vec<bool> = catalog.iter().map(|a| a.optimal).collect();
        assert_eq!(optimal, [true, false, true, true]);
    }
}
