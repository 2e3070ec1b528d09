/// This module implements a variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// which additionally records every popped node, in pop order, so the search can be replayed.
/// Dijkstra is the special case of a zero heuristic.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Orders on estimated cost only; among equal estimates the earliest push is popped
        // first, which makes the heap behave like a stable sort.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Outcome of a best-first search. `path` is empty when no goal was reached.
pub(crate) struct BestFirstOutcome<N> {
    pub path: Vec<N>,
    pub nodes_explored: usize,
    pub exploration_order: Vec<N>,
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Pops nodes in order of cost plus heuristic until `success` holds for a popped node.
///
/// Every pop is counted and recorded before checking whether the entry is stale, so a node
/// that was pushed again with a better cost before being popped is counted once per pop.
/// The goal test also happens before the staleness check.
pub(crate) fn best_first<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> BestFirstOutcome<N>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut sequence = 0;
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        sequence,
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut nodes_explored = 0;
    let mut exploration_order = Vec::new();
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            nodes_explored += 1;
            exploration_order.push(node.clone());
            if success(node) {
                return BestFirstOutcome {
                    path: reverse_path(&parents, |&(p, _)| p, index),
                    nodes_explored,
                    exploration_order,
                };
            }
            // We may have inserted a node several times into the binary heap if we found
            // a better way to access it. Only the entry carrying the best cost is expanded.
            if cost > c {
                continue;
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            sequence += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                sequence,
                index: n,
            });
        }
    }
    BestFirstOutcome {
        path: Vec::new(),
        nodes_explored,
        exploration_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A line graph 0 - 1 - 2 - 3 with a shortcut 0 - 3 that costs more than walking.
    fn line_successors(n: &u32) -> Vec<(u32, u32)> {
        let mut s = Vec::new();
        if *n < 3 {
            s.push((n + 1, 1));
        }
        if *n > 0 {
            s.push((n - 1, 1));
        }
        if *n == 0 {
            s.push((3, 5));
        }
        s
    }

    #[test]
    fn finds_cheapest_path() {
        let outcome = best_first(&0u32, line_successors, |_| 0u32, |n| *n == 3);
        assert_eq!(outcome.path, vec![0, 1, 2, 3]);
        assert_eq!(outcome.nodes_explored, outcome.exploration_order.len());
    }

    #[test]
    fn start_is_goal() {
        let outcome = best_first(&7u32, |_| Vec::<(u32, u32)>::new(), |_| 0u32, |n| *n == 7);
        assert_eq!(outcome.path, vec![7]);
        assert_eq!(outcome.nodes_explored, 1);
    }

    #[test]
    fn exhaustion_returns_empty_path() {
        let outcome = best_first(&0u32, line_successors, |_| 0u32, |n| *n == 9);
        assert!(outcome.path.is_empty());
        // The shortcut pushes 3 at cost 5 before the walk reaches it at cost 3, leaving a stale
        // entry that is still popped and counted.
        assert_eq!(outcome.nodes_explored, 5);
        assert_eq!(outcome.exploration_order, vec![0, 1, 2, 3, 3]);
    }

    #[test]
    fn equal_estimates_pop_in_push_order() {
        // 0 fans out to 3, 1, 2 in that order, all at cost 1.
        let successors = |n: &u32| -> Vec<(u32, u32)> {
            if *n == 0 {
                vec![(3, 1), (1, 1), (2, 1)]
            } else {
                vec![]
            }
        };
        let outcome = best_first(&0u32, successors, |_| 0u32, |_| false);
        assert_eq!(outcome.exploration_order, vec![0, 3, 1, 2]);
    }
}
