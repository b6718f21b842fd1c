use super::{
    Strategy,
    search::{Search, Step},
};
use crate::maze::{Direction, Grid};

/// Right-hand rule walker.
///
/// Each step turns right if it can, otherwise goes straight, turns left, or turns
/// back, in that order. The next move depends only on the current cell and facing,
/// so arriving in a `(cell, facing)` state a second time means the walk is circling
/// and will never reach the end.
#[derive(Debug, Clone)]
pub(crate) struct WallFollower {
    facing: Direction,
    /// Every cell walked through, in order, revisits included
    trace: Vec<usize>,
    /// Per cell, a bit per facing it has been entered with
    seen: Vec<u8>,
}

impl Default for WallFollower {
    fn default() -> Self {
        WallFollower {
            facing: Direction::Right,
            trace: Vec::new(),
            seen: Vec::new(),
        }
    }
}

impl WallFollower {
    fn bit(direction: Direction) -> u8 {
        1 << direction.index()
    }
}

impl Strategy for WallFollower {
    fn reset(&mut self, grid: &Grid, search: &mut Search) {
        let start = search.start();
        self.facing = Direction::Right;
        self.trace.clear();
        self.trace.push(start);
        self.seen.clear();
        self.seen.resize(grid.len(), 0);
        self.seen[start] = WallFollower::bit(self.facing);
    }

    fn advance(&mut self, grid: &Grid, search: &mut Search) -> Step {
        let Some(index) = search.current() else {
            return Step::Exhausted;
        };
        if index == search.end() {
            return Step::Found;
        }

        let coord = grid.unravel_index(index);
        let preference = [
            self.facing.turn_right(),
            self.facing,
            self.facing.turn_left(),
            self.facing.opposite(),
        ];
        let Some((direction, next)) = preference.into_iter().find_map(|dir| {
            (!grid.has_wall(coord, dir))
                .then(|| grid.step(coord, dir))
                .flatten()
                .map(|next| (dir, next))
        }) else {
            tracing::debug!("[solver] wall follower is boxed in at {:?}", coord);
            return Step::Exhausted;
        };

        let next = grid.ravel_index(next);
        let distance = search.node(index).distance.map_or(1, |d| d + 1);
        search.visit(next);
        search.relax(next, index, distance);
        search.set_current(next);
        self.facing = direction;
        self.trace.push(next);

        if next == search.end() {
            return Step::Found;
        }
        let bit = WallFollower::bit(direction);
        if self.seen[next] & bit != 0 {
            tracing::debug!("[solver] wall follower is circling, giving up");
            return Step::Exhausted;
        }
        self.seen[next] |= bit;
        Step::Continue
    }

    /// Walks the trace backward from the end, keeping every cell open to the
    /// last kept one, and stops once the start is kept.
    ///
    /// Detours the walker took after it last left the start stay on the path.
    fn reconstruct(&self, grid: &Grid, search: &mut Search) {
        let start = search.start();
        let mut kept = grid.unravel_index(search.end());
        let mut path = vec![kept];
        for &index in self.trace.iter().rev() {
            if grid.ravel_index(kept) == start {
                break;
            }
            let coord = grid.unravel_index(index);
            if grid.is_open_between(kept, coord) {
                path.push(coord);
                kept = coord;
            }
        }
        path.reverse();
        search.set_solution(path);
    }
}
