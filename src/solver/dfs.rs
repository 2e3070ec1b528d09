use fxhash::FxHashSet;
use smallvec::SmallVec;

use crate::{
    algorithm::Algorithm,
    pathing_grid::PathingGrid,
    solver::{Exploration, GridSolver},
    Position, N_SMALLVEC_SIZE,
};

/// Depth-first search. Follows the first open neighbour as deep as it goes and backtracks on dead
/// ends, so the path it returns is a path, not necessarily a short one. Cells are recorded when
/// the search enters them.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

/// One level of the descent: the open neighbours of the cell at the same depth of the path and
/// how far through them the search is.
struct Frame {
    neighbours: SmallVec<[Position; N_SMALLVEC_SIZE]>,
    next: usize,
}

impl GridSolver for DfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn explore(&self, grid: &PathingGrid, start: Position, goal: Position) -> Exploration {
        let mut visited: FxHashSet<Position> = FxHashSet::default();
        visited.insert(start);
        let mut path = vec![start];
        let mut exploration_order = vec![start];
        let mut nodes_explored = 1;
        if start == goal {
            return Exploration {
                path,
                nodes_explored,
                exploration_order,
            };
        }
        // `path` and `stack` grow and shrink together, path[i] being the cell of stack[i].
        let mut stack = vec![Frame {
            neighbours: grid.neighbours(&start),
            next: 0,
        }];
        while let Some(frame) = stack.last_mut() {
            let Some(&neighbour) = frame.neighbours.get(frame.next) else {
                // Dead end, backtrack.
                stack.pop();
                path.pop();
                continue;
            };
            frame.next += 1;
            if !visited.insert(neighbour) {
                continue;
            }
            path.push(neighbour);
            nodes_explored += 1;
            exploration_order.push(neighbour);
            if neighbour == goal {
                return Exploration {
                    path,
                    nodes_explored,
                    exploration_order,
                };
            }
            stack.push(Frame {
                neighbours: grid.neighbours(&neighbour),
                next: 0,
            });
        }
        Exploration {
            path: Vec::new(),
            nodes_explored,
            exploration_order,
        }
    }
}
