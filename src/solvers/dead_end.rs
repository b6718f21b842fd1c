use super::{
    Strategy,
    dfs::Dfs,
    search::{Search, Step},
};
use crate::maze::Grid;

/// Dead-end filling: plug every dead end first, one per step, then walk the
/// rest of the maze with a depth-first search.
///
/// Plugged cells stay visited, so the search never enters them. The parent
/// recorded for a plugged cell is its only way out and never ends up on the
/// reported path.
#[derive(Debug, Default, Clone)]
pub(crate) struct DeadEndFilling {
    dead_ends: Vec<usize>,
    filled: usize,
    dfs: Dfs,
    searching: bool,
}

impl Strategy for DeadEndFilling {
    fn reset(&mut self, grid: &Grid, search: &mut Search) {
        let (start, end) = (grid.start(), grid.end());
        self.dead_ends = grid
            .coords()
            .filter(|&coord| coord != start && coord != end)
            .filter(|&coord| grid.neighbors(coord, false).count() == 1)
            .map(|coord| grid.ravel_index(coord))
            .collect();
        self.filled = 0;
        self.searching = false;
        self.dfs.reset(grid, search);
    }

    fn advance(&mut self, grid: &Grid, search: &mut Search) -> Step {
        if let Some(&dead_end) = self.dead_ends.get(self.filled) {
            search.set_current(dead_end);
            search.visit(dead_end);
            let coord = grid.unravel_index(dead_end);
            if let Some(exit) = grid.neighbors(coord, false).next() {
                let exit = grid.ravel_index(exit);
                search.node_mut(dead_end).parent = Some(exit);
            }
            self.filled += 1;
            return Step::Continue;
        }

        if !self.searching {
            self.searching = true;
            tracing::debug!(
                "[solver] {} dead ends filled, searching the remaining cells",
                self.dead_ends.len()
            );
        }
        self.dfs.advance(grid, search)
    }
}
