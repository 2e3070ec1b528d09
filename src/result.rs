#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{algorithm::Algorithm, solver::Exploration, Position};

/// The outcome of one search. It owns all of its data and keeps no reference to the grid it was
/// computed on, so it can be stored, replayed or sent elsewhere freely.
///
/// With the `serde` feature the field names on the wire are those used by the history store:
/// `algorithm_used`, `path`, `path_length`, `nodes_explored`, `execution_time_ms`, `path_found`
/// and `exploration_order`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    #[cfg_attr(feature = "serde", serde(rename = "algorithm_used"))]
    pub algorithm: Algorithm,
    pub path: Vec<Position>,
    /// Number of cells on the path, endpoints included; 0 when no path was found.
    pub path_length: usize,
    pub nodes_explored: usize,
    /// Duration of the search itself, rounded to hundredths of a millisecond.
    pub execution_time_ms: f64,
    pub path_found: bool,
    pub exploration_order: Vec<Position>,
}

impl SearchResult {
    pub fn new(algorithm: Algorithm, exploration: Exploration, execution_time_ms: f64) -> SearchResult {
        let Exploration {
            path,
            nodes_explored,
            exploration_order,
        } = exploration;
        SearchResult {
            algorithm,
            path_length: path.len(),
            path_found: !path.is_empty(),
            path,
            nodes_explored,
            execution_time_ms,
            exploration_order,
        }
    }

    /// Number of moves along the path.
    pub fn path_cost(&self) -> usize {
        crate::path_cost(&self.path)
    }
}
