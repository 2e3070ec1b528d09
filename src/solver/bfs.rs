use fxhash::FxHashSet;
use std::collections::VecDeque;

use crate::{
    algorithm::Algorithm,
    pathing_grid::PathingGrid,
    solver::{Exploration, GridSolver},
    Position,
};

/// Breadth-first search. Cells are recorded when they are discovered, and the first time the
/// goal is dequeued its path has the fewest possible moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn explore(&self, grid: &PathingGrid, start: Position, goal: Position) -> Exploration {
        // Every discovered cell gets a slot in the exploration order; `parents` holds the slot of
        // the cell it was discovered from, and the queue holds slots.
        let mut visited: FxHashSet<Position> = FxHashSet::default();
        visited.insert(start);
        let mut exploration_order = vec![start];
        let mut parents = vec![usize::MAX];
        let mut queue = VecDeque::from([0]);
        let mut nodes_explored = 0;
        while let Some(slot) = queue.pop_front() {
            nodes_explored += 1;
            let node = exploration_order[slot];
            if node == goal {
                return Exploration {
                    path: unwind_path(&exploration_order, &parents, slot),
                    nodes_explored,
                    exploration_order,
                };
            }
            for neighbour in grid.neighbours(&node) {
                if visited.insert(neighbour) {
                    parents.push(slot);
                    exploration_order.push(neighbour);
                    queue.push_back(exploration_order.len() - 1);
                }
            }
        }
        Exploration {
            path: Vec::new(),
            nodes_explored,
            exploration_order,
        }
    }
}

fn unwind_path(nodes: &[Position], parents: &[usize], last: usize) -> Vec<Position> {
    let mut path: Vec<Position> = itertools::unfold(last, |slot| {
        nodes.get(*slot).map(|&node| {
            *slot = parents[*slot];
            node
        })
    })
    .collect();
    path.reverse();
    path
}
