//! Step-by-step playback of a finished search.
//!
//! [Replay] walks the exploration record of a [SearchResult] one cell at a time. It never runs a
//! search itself and the caller owns the timer; [Replay::step_interval] only suggests a pace.

use std::time::Duration;

use crate::{result::SearchResult, Position};

/// One revealed cell. `step` counts from 1 up to `total`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReplayFrame {
    pub step: usize,
    pub total: usize,
    pub position: Position,
}

/// A finite, restartable iterator over the exploration record of a result.
#[derive(Clone, Debug)]
pub struct Replay<'a> {
    order: &'a [Position],
    next: usize,
}

impl<'a> Replay<'a> {
    pub fn new(result: &'a SearchResult) -> Replay<'a> {
        Replay {
            order: &result.exploration_order,
            next: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// Cells revealed so far.
    pub fn revealed(&self) -> &'a [Position] {
        let order: &'a [Position] = self.order;
        &order[..self.next]
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.order.len()
    }

    /// Rewinds to before the first cell.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Suggested delay between frames for a grid of `grid_cells` cells. Larger grids start from a
    /// faster base pace; short records are slowed down to last about three seconds, capped at
    /// 300 ms per frame.
    pub fn step_interval(&self, grid_cells: usize) -> Duration {
        let base = if grid_cells > 400 {
            30.0
        } else if grid_cells > 225 {
            50.0
        } else {
            100.0
        };
        let spread = 3000.0 / self.order.len().max(1) as f64;
        let millis = f64::max(base, spread.min(300.0));
        Duration::from_micros((millis * 1000.0).round() as u64)
    }
}

impl<'a> Iterator for Replay<'a> {
    type Item = ReplayFrame;

    fn next(&mut self) -> Option<ReplayFrame> {
        let position = *self.order.get(self.next)?;
        self.next += 1;
        Some(ReplayFrame {
            step: self.next,
            total: self.order.len(),
            position,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.order.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Replay<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pathing_grid::PathingGrid, Algorithm};

    fn result() -> SearchResult {
        let grid = PathingGrid::new(2, 2, false);
        Algorithm::Bfs.solve(&grid, Position::new(0, 0), Position::new(1, 1))
    }

    #[test]
    fn replays_exploration_order() {
        let result = result();
        let frames: Vec<ReplayFrame> = Replay::new(&result).collect();
        assert_eq!(frames.len(), result.exploration_order.len());
        assert_eq!(frames[0].step, 1);
        assert_eq!(frames.last().unwrap().step, frames.len());
        assert!(frames.iter().all(|f| f.total == frames.len()));
        let positions: Vec<Position> = frames.iter().map(|f| f.position).collect();
        assert_eq!(positions, result.exploration_order);
    }

    #[test]
    fn can_restart() {
        let result = result();
        let mut replay = Replay::new(&result);
        assert_eq!(replay.len(), 4);
        replay.next();
        replay.next();
        assert_eq!(replay.revealed(), &result.exploration_order[..2]);
        replay.by_ref().for_each(drop);
        assert!(replay.is_finished());
        replay.reset();
        assert_eq!(replay.revealed(), &[] as &[Position]);
        assert_eq!(replay.count(), 4);
    }

    #[test]
    fn pacing_depends_on_grid_and_record_size() {
        let result = result();
        let replay = Replay::new(&result);
        // 4 frames on a small grid: 3000 / 4 = 750, capped at 300 ms.
        assert_eq!(replay.step_interval(4), Duration::from_millis(300));
        let mut long = result.clone();
        long.exploration_order = vec![Position::new(0, 0); 1000];
        let replay = Replay::new(&long);
        assert_eq!(replay.step_interval(100), Duration::from_millis(100));
        assert_eq!(replay.step_interval(300), Duration::from_millis(50));
        assert_eq!(replay.step_interval(500), Duration::from_millis(30));
    }
}
