use std::{cmp::Reverse, collections::BinaryHeap};

use rand::{Rng, rngs::StdRng};

use super::{
    Strategy,
    search::{Search, Step},
};
use crate::{
    generators::get_rng,
    maze::{Coord, Grid},
};

/// A* with the Manhattan distance to the end as heuristic.
///
/// Equal `f` scores are ordered by a random key drawn from the instance's own
/// generator, which removes directional bias without affecting optimality.
#[derive(Debug, Clone)]
pub(crate) struct AStar {
    /// Min-heap of (f, random tie-breaker, cell)
    open: BinaryHeap<Reverse<(u32, u64, usize)>>,
    closed: Vec<bool>,
    seed: Option<u64>,
    rng: StdRng,
}

impl AStar {
    pub fn new(seed: Option<u64>) -> Self {
        AStar {
            open: BinaryHeap::new(),
            closed: Vec::new(),
            seed,
            rng: get_rng(seed),
        }
    }

    fn manhattan(a: Coord, b: Coord) -> u32 {
        a.0.abs_diff(b.0) as u32 + a.1.abs_diff(b.1) as u32
    }

    fn push(&mut self, f: u32, index: usize) {
        let tie_breaker = self.rng.random::<u64>();
        self.open.push(Reverse((f, tie_breaker, index)));
    }
}

impl Strategy for AStar {
    fn reset(&mut self, grid: &Grid, search: &mut Search) {
        // Restarting with a seed replays the same tie-breaks
        if let Some(seed) = self.seed {
            self.rng = get_rng(Some(seed));
        }
        self.open.clear();
        self.closed.clear();
        self.closed.resize(grid.len(), false);

        let start = search.start();
        let h = AStar::manhattan(grid.start(), grid.end());
        search.node_mut(start).heuristic = Some(h);
        self.push(h, start);
    }

    fn advance(&mut self, grid: &Grid, search: &mut Search) -> Step {
        let Some(Reverse((_, _, index))) = self.open.pop() else {
            return Step::Exhausted;
        };
        if self.closed[index] {
            return Step::Continue;
        }
        search.set_current(index);
        if index == search.end() {
            return Step::Found;
        }

        self.closed[index] = true;
        search.visit(index);

        let g = search.node(index).distance.unwrap_or(0);
        let coord = grid.unravel_index(index);
        let end = grid.end();
        for neighbor in grid.neighbors(coord, false) {
            let h = AStar::manhattan(neighbor, end);
            let neighbor = grid.ravel_index(neighbor);
            if self.closed[neighbor] {
                continue;
            }
            let tentative_g = g + 1;
            let improved = search
                .node(neighbor)
                .distance
                .is_none_or(|existing| tentative_g < existing);
            if improved {
                search.relax(neighbor, index, tentative_g);
                search.node_mut(neighbor).heuristic = Some(h);
                self.push(tentative_g + h, neighbor);
            }
        }
        Step::Continue
    }
}
