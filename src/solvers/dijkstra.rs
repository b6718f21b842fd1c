use std::{cmp::Reverse, collections::BinaryHeap};

use super::{
    Strategy,
    search::{Search, Step},
};
use crate::maze::Grid;

#[derive(Debug, Default, Clone)]
pub(crate) struct Dijkstra {
    /// Using Reverse to turn the max-heap into a min-heap.
    /// Keyed by (distance, insertion order, cell) so equal distances pop in push order.
    queue: BinaryHeap<Reverse<(u32, u64, usize)>>,
    /// Cells whose distance is final
    finalized: Vec<bool>,
    pushes: u64,
}

impl Dijkstra {
    fn push(&mut self, distance: u32, index: usize) {
        self.queue.push(Reverse((distance, self.pushes, index)));
        self.pushes += 1;
    }
}

impl Strategy for Dijkstra {
    fn reset(&mut self, grid: &Grid, search: &mut Search) {
        self.queue.clear();
        self.finalized.clear();
        self.finalized.resize(grid.len(), false);
        self.pushes = 0;
        self.push(0, search.start());
    }

    fn advance(&mut self, grid: &Grid, search: &mut Search) -> Step {
        let Some(Reverse((distance, _, index))) = self.queue.pop() else {
            return Step::Exhausted;
        };
        // Stale entry left behind by a later improvement
        if self.finalized[index] {
            return Step::Continue;
        }
        search.set_current(index);
        if index == search.end() {
            return Step::Found;
        }

        self.finalized[index] = true;
        search.visit(index);

        // Uniform cost for each step
        let new_distance = distance + 1;
        let coord = grid.unravel_index(index);
        for neighbor in grid.neighbors(coord, false) {
            let neighbor = grid.ravel_index(neighbor);
            if self.finalized[neighbor] {
                continue;
            }
            let is_cheaper = search
                .node(neighbor)
                .distance
                .is_none_or(|existing| new_distance < existing);
            if is_cheaper {
                search.relax(neighbor, index, new_distance);
                self.push(new_distance, neighbor);
            }
        }
        Step::Continue
    }
}
