use rand::{Rng, rngs::StdRng};

use crate::maze::{Coord, Grid};

/// Randomized depth-first carving, one stack operation per step.
#[derive(Debug, Clone)]
pub(crate) struct RecurBacktrack {
    /// Visited cells that may still have unvisited neighbors
    stack: Vec<Coord>,
}

impl RecurBacktrack {
    pub fn new(grid: &mut Grid) -> Self {
        let start = grid.start();
        grid[start].visited = true;
        RecurBacktrack { stack: vec![start] }
    }

    pub fn current(&self) -> Option<Coord> {
        self.stack.last().copied()
    }

    pub fn step(&mut self, grid: &mut Grid, rng: &mut StdRng) -> bool {
        let Some(&cell) = self.stack.last() else {
            return true;
        };

        // Walls are ignored here: carving through them is how passages get made
        let neighbors = grid
            .neighbors(cell, true)
            .filter(|&c| !grid[c].visited)
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Dead end, backtrack
            self.stack.pop();
        } else {
            let neighbor = neighbors[rng.random_range(0..neighbors.len())];
            grid.remove_wall_between(cell, neighbor);
            grid[neighbor].visited = true;
            self.stack.push(neighbor);
        }
        false
    }
}
