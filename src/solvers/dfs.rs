use super::{
    Strategy,
    search::{Search, Step},
};
use crate::maze::Grid;

/// Depth-first search with an explicit stack. Neighbors are marked when pushed,
/// so each cell enters the stack at most once.
#[derive(Debug, Default, Clone)]
pub(crate) struct Dfs {
    stack: Vec<usize>,
}

impl Strategy for Dfs {
    fn reset(&mut self, _grid: &Grid, search: &mut Search) {
        self.stack.clear();
        self.stack.push(search.start());
    }

    fn advance(&mut self, grid: &Grid, search: &mut Search) -> Step {
        let Some(index) = self.stack.pop() else {
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
                self.stack.push(neighbor);
            }
        }
        Step::Continue
    }
}
