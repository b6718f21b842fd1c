use super::{
    Strategy,
    search::{Search, Step},
};
use crate::maze::Grid;

/// Iterative deepening: a depth-capped DFS restarted from the start cell with a
/// cap one larger each time the stack runs dry.
///
/// The shallowest depth a cell was reached at in the current iteration is its
/// node distance, so a restart only has to start a new pass in [`Search`].
#[derive(Debug, Default, Clone)]
pub(crate) struct Ids {
    stack: Vec<(usize, u32)>,
    depth_limit: u32,
    /// Whether the current iteration pruned anything at the cap
    hit_cap: bool,
}

impl Ids {
    fn restart(&mut self, search: &Search) {
        let start = search.start();
        self.stack.clear();
        self.stack.push((start, 0));
        self.hit_cap = false;
    }

    fn is_improvement(&self, search: &Search, index: usize, depth: u32) -> bool {
        let node = search.node(index);
        !node.visited || node.distance.is_none_or(|known| depth < known)
    }
}

impl Strategy for Ids {
    fn reset(&mut self, _grid: &Grid, search: &mut Search) {
        self.depth_limit = 0;
        self.restart(search);
    }

    fn advance(&mut self, grid: &Grid, search: &mut Search) -> Step {
        let Some((index, depth)) = self.stack.pop() else {
            // Nothing was cut off, so a deeper pass would see the same cells
            if !self.hit_cap {
                return Step::Exhausted;
            }
            self.depth_limit += 1;
            if self.depth_limit as usize > grid.len() {
                return Step::Exhausted;
            }
            tracing::debug!("[solver] ids deepening to {}", self.depth_limit);
            search.clear_nodes();
            self.restart(search);
            return Step::Continue;
        };

        search.set_current(index);
        if index == search.end() {
            return Step::Found;
        }

        let coord = grid.unravel_index(index);
        let next_depth = depth + 1;
        if depth < self.depth_limit {
            for neighbor in grid.neighbors(coord, false) {
                let neighbor = grid.ravel_index(neighbor);
                // Revisit cells reached at a strictly smaller depth than before
                if self.is_improvement(search, neighbor, next_depth) {
                    search.relax(neighbor, index, next_depth);
                    search.revisit(neighbor);
                    self.stack.push((neighbor, next_depth));
                }
            }
        } else if grid
            .neighbors(coord, false)
            .any(|n| self.is_improvement(search, grid.ravel_index(n), next_depth))
        {
            self.hit_cap = true;
        }
        Step::Continue
    }
}
