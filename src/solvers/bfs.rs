use std::collections::VecDeque;

use super::{
    Strategy,
    search::{Search, Step},
};
use crate::maze::Grid;

/// Breadth-first search. Cells leave the queue in non-decreasing distance order,
/// so the first time the end is dequeued its parent chain is a shortest path.
#[derive(Debug, Default, Clone)]
pub(crate) struct Bfs {
    queue: VecDeque<usize>,
}

impl Strategy for Bfs {
    fn reset(&mut self, _grid: &Grid, search: &mut Search) {
        self.queue.clear();
        self.queue.push_back(search.start());
    }

    fn advance(&mut self, grid: &Grid, search: &mut Search) -> Step {
        let Some(index) = self.queue.pop_front() else {
            return Step::Exhausted;
        };
        search.set_current(index);
        if index == search.end() {
            return Step::Found;
        }

        let coord = grid.unravel_index(index);
        for neighbor in grid.neighbors(coord, false) {
            let neighbor = grid.ravel_index(neighbor);
            if !search.is_visited(neighbor) {
                search.discover(neighbor, index);
                self.queue.push_back(neighbor);
            }
        }
        Step::Continue
    }
}
