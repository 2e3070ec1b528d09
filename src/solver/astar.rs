use crate::{
    algorithm::Algorithm,
    best_first::best_first,
    pathing_grid::PathingGrid,
    solver::{Exploration, GridSolver},
    Position,
};

/// A* guided by the Manhattan distance to the goal, which never overestimates on a 4-connected
/// unit-cost grid, so the first path popped for the goal is a shortest one.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Multiplies the heuristic. Values above 1.0 give up optimality to expand fewer cells.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// The Manhattan distance times the heuristic factor.
    pub fn heuristic(&self, p1: &Position, p2: &Position) -> u32 {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as u32
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Astar
    }

    fn explore(&self, grid: &PathingGrid, start: Position, goal: Position) -> Exploration {
        let outcome = best_first(
            &start,
            |node| grid.neighbours_and_cost(node),
            |node| self.heuristic(node, &goal),
            |node| *node == goal,
        );
        Exploration {
            path: outcome.path,
            nodes_explored: outcome.nodes_explored,
            exploration_order: outcome.exploration_order,
        }
    }
}
