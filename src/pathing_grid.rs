use crate::error::SearchError;
use crate::{Position, N_SMALLVEC_SIZE};
use core::fmt;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] stores the occupancy of a rectangular maze as one [bool] per cell, [true] meaning
/// blocked (a wall) and [false] walkable. In addition it maintains the connected components of
/// walkable cells under 4-connected movement in a [UnionFind] structure, so reachability can be
/// answered without searching.
///
/// Searches only borrow the grid; editing happens between searches through [set](Self::set).
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl PathingGrid {
    /// Creates a `rows` by `cols` grid with every cell set to `blocked`.
    pub fn new(rows: usize, cols: usize, blocked: bool) -> PathingGrid {
        let mut grid = PathingGrid {
            rows,
            cols,
            cells: vec![blocked; rows * cols],
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Builds a grid from rows of cell values where `1` is walkable and anything else is a wall.
    /// Fails with [SearchError::InvalidGrid] if there are no rows, the first row is empty or the
    /// rows differ in width.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<PathingGrid, SearchError> {
        let Some(first) = rows.first() else {
            return Err(SearchError::invalid_grid("grid has no rows"));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(SearchError::invalid_grid("grid rows are empty"));
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (ix, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(SearchError::invalid_grid(format!(
                    "row {ix} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            cells.extend(row.iter().map(|&v| v != 1));
        }
        let mut grid = PathingGrid {
            rows: rows.len(),
            cols,
            cells,
            components: UnionFind::new(rows.len() * cols),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, walls included.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.col >= 0 && (pos.row as usize) < self.rows && (pos.col as usize) < self.cols
    }

    /// Flat index of an in-bounds position.
    pub fn get_ix_point(&self, pos: &Position) -> usize {
        debug_assert!(self.in_bounds(*pos));
        pos.row as usize * self.cols + pos.col as usize
    }

    fn point_at(&self, ix: usize) -> Position {
        Position::new((ix / self.cols) as i32, (ix % self.cols) as i32)
    }

    /// Whether the cell is blocked. Out of bounds cells count as blocked.
    pub fn get(&self, row: i32, col: i32) -> bool {
        self.get_point(Position::new(row, col))
    }

    pub fn get_point(&self, pos: Position) -> bool {
        !self.in_bounds(pos) || self.cells[self.get_ix_point(&pos)]
    }

    /// True only for in-bounds walkable cells.
    pub fn is_walkable(&self, row: i32, col: i32) -> bool {
        self.can_move_to(Position::new(row, col))
    }

    pub fn can_move_to(&self, pos: Position) -> bool {
        !self.get_point(pos)
    }

    /// The walkable in-bounds neighbours of `pos`, in the order right, down, left, up.
    pub fn neighbours(&self, pos: &Position) -> SmallVec<[Position; N_SMALLVEC_SIZE]> {
        pos.neumann_neighborhood()
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    /// Neighbours paired with their unit move cost, the successor form used by the weighted solvers.
    pub fn neighbours_and_cost(&self, pos: &Position) -> SmallVec<[(Position, u32); N_SMALLVEC_SIZE]> {
        self.neighbours(pos).into_iter().map(|p| (p, 1)).collect()
    }

    /// Updates a cell. Opening a cell joins it with its walkable neighbours; blocking a walkable
    /// cell may split a component, so the components are flagged as dirty instead.
    ///
    /// Panics if the position is out of bounds.
    pub fn set(&mut self, row: i32, col: i32, blocked: bool) {
        self.set_point(Position::new(row, col), blocked);
    }

    pub fn set_point(&mut self, pos: Position, blocked: bool) {
        assert!(self.in_bounds(pos), "{pos} is outside the {}x{} grid", self.rows, self.cols);
        let ix = self.get_ix_point(&pos);
        if blocked {
            if !self.cells[ix] {
                self.components_dirty = true;
            }
        } else {
            for n in self.neighbours(&pos) {
                self.components.union(ix, self.get_ix_point(&n));
            }
        }
        self.cells[ix] = blocked;
    }

    /// Flips a cell between wall and walkable, returning the new blocked state.
    pub fn toggle(&mut self, pos: Position) -> bool {
        let blocked = !self.get_point(pos);
        self.set_point(pos, blocked);
        blocked
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Position, goal: &Position) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Walls and out of bounds
    /// positions are unreachable from everything.
    pub fn unreachable(&self, start: &Position, goal: &Position) -> bool {
        if self.components_dirty {
            debug!("Querying reachability on dirty components");
        }
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            !self
                .components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
        } else {
            true
        }
    }

    /// Number of walkable cells reachable from `pos`, itself included; 0 for walls.
    pub fn component_size(&self, pos: &Position) -> usize {
        if !self.can_move_to(*pos) {
            return 0;
        }
        let root = self.components.find(self.get_ix_point(pos));
        (0..self.cells.len())
            .filter(|&ix| !self.cells[ix] && self.components.find(ix) == root)
            .count()
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up walkable grid neighbours to the same
    /// components. Looking right and down from every cell covers each edge once.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components for {}x{} grid", self.rows, self.cols);
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for ix in 0..self.cells.len() {
            if self.cells[ix] {
                continue;
            }
            let point = self.point_at(ix);
            [Position::new(point.row, point.col + 1), Position::new(point.row + 1, point.col)]
                .into_iter()
                .filter(|p| self.can_move_to(*p))
                .map(|p| self.get_ix_point(&p))
                .collect::<SmallVec<[usize; 2]>>()
                .into_iter()
                .for_each(|n_ix| {
                    self.components.union(ix, n_ix);
                });
        }
    }

    /// The grid in the input format, one row per line with `1` for walkable and `0` for walls.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|&blocked| u8::from(!blocked)).collect())
            .collect()
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in self.to_rows() {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}
