//! Error kinds reported before a search starts.

use crate::Position;
use std::fmt;

/// Reasons a grid, an endpoint or an algorithm selector is rejected. Failing to find a path is
/// not among them: that is a regular [SearchResult](crate::SearchResult) with an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The grid has no rows, zero-width rows, or rows of differing width.
    InvalidGrid {
        /// What is wrong with the grid.
        reason: String,
    },
    /// The start lies outside the grid.
    InvalidStart(Position),
    /// The end lies outside the grid.
    InvalidEnd(Position),
    /// The start lies on a wall.
    StartNotWalkable(Position),
    /// The end lies on a wall.
    EndNotWalkable(Position),
    /// The selector does not name a supported algorithm.
    UnknownAlgorithm(String),
}

impl SearchError {
    pub(crate) fn invalid_grid(reason: impl Into<String>) -> SearchError {
        SearchError::InvalidGrid {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { reason } => write!(f, "invalid maze grid: {reason}"),
            Self::InvalidStart(p) => write!(f, "invalid start position {p}"),
            Self::InvalidEnd(p) => write!(f, "invalid end position {p}"),
            Self::StartNotWalkable(p) => write!(f, "start position {p} is not walkable"),
            Self::EndNotWalkable(p) => write!(f, "end position {p} is not walkable"),
            Self::UnknownAlgorithm(name) => write!(f, "unknown algorithm: {name}"),
        }
    }
}

impl std::error::Error for SearchError {}
