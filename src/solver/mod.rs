use crate::{algorithm::Algorithm, pathing_grid::PathingGrid, result::SearchResult, Position};
use log::debug;
use std::time::{Duration, Instant};

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

/// What a strategy hands back before timing and bookkeeping are attached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exploration {
    /// Start to goal inclusive, empty when the goal was not reached.
    pub path: Vec<Position>,
    pub nodes_explored: usize,
    /// Cells in the order the strategy discovered or expanded them.
    pub exploration_order: Vec<Position>,
}

/// A search strategy over a [PathingGrid]. Implementations hold no state between calls, so one
/// solver can serve any number of grids and threads.
pub trait GridSolver {
    fn algorithm(&self) -> Algorithm;

    /// Runs the strategy from `start` until `goal` is reached or the frontier is exhausted.
    fn explore(&self, grid: &PathingGrid, start: Position, goal: Position) -> Exploration;

    /// Runs [explore](Self::explore), timing it, and assembles the [SearchResult].
    fn solve(&self, grid: &PathingGrid, start: Position, goal: Position) -> SearchResult {
        debug!(
            "Solving {}x{} grid from {} to {} with {}",
            grid.rows(),
            grid.cols(),
            start,
            goal,
            self.algorithm()
        );
        let timer = Instant::now();
        let exploration = self.explore(grid, start, goal);
        let elapsed = timer.elapsed();
        let result = SearchResult::new(self.algorithm(), exploration, round_millis(elapsed));
        debug!(
            "{} {} a path of length {} after exploring {} nodes in {} ms",
            result.algorithm,
            if result.path_found { "found" } else { "did not find" },
            result.path_length,
            result.nodes_explored,
            result.execution_time_ms
        );
        result
    }
}

/// Milliseconds rounded to two decimal places.
pub fn round_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_are_rounded_to_hundredths() {
        assert_eq!(round_millis(Duration::from_micros(1234)), 1.23);
        assert_eq!(round_millis(Duration::from_micros(1236)), 1.24);
        assert_eq!(round_millis(Duration::from_nanos(4_999)), 0.0);
        assert_eq!(round_millis(Duration::from_secs(2)), 2000.0);
    }
}
