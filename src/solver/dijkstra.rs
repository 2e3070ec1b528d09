use crate::{
    algorithm::Algorithm,
    best_first::best_first,
    pathing_grid::PathingGrid,
    solver::{Exploration, GridSolver},
    Position,
};

/// Uniform-cost search. With every move costing 1 it expands cells in order of distance from the
/// start, recording each pop, stale ones included.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn explore(&self, grid: &PathingGrid, start: Position, goal: Position) -> Exploration {
        let outcome = best_first(
            &start,
            |node| grid.neighbours_and_cost(node),
            |_| 0,
            |node| *node == goal,
        );
        Exploration {
            path: outcome.path,
            nodes_explored: outcome.nodes_explored,
            exploration_order: outcome.exploration_order,
        }
    }
}
