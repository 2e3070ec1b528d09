use crate::{error::SearchError, pathing_grid::PathingGrid, Position};

/// Checks that a search from `start` to `end` on `grid` is well-formed. Checks run in a fixed
/// order and the first failure is returned: grid shape, start bounds, end bounds, start cell,
/// end cell. Must pass before [solve](crate::solve) is called.
pub fn validate(grid: &PathingGrid, start: Position, end: Position) -> Result<(), SearchError> {
    if grid.rows() == 0 {
        return Err(SearchError::invalid_grid("grid has no rows"));
    }
    if grid.cols() == 0 {
        return Err(SearchError::invalid_grid("grid rows are empty"));
    }
    if !grid.in_bounds(start) {
        return Err(SearchError::InvalidStart(start));
    }
    if !grid.in_bounds(end) {
        return Err(SearchError::InvalidEnd(end));
    }
    if !grid.can_move_to(start) {
        return Err(SearchError::StartNotWalkable(start));
    }
    if !grid.can_move_to(end) {
        return Err(SearchError::EndNotWalkable(end));
    }
    Ok(())
}
