use rand::{Rng, rngs::StdRng};

use crate::maze::{Coord, Grid};

/// Randomized Prim's algorithm: grow the maze from the start cell by attaching a
/// random frontier cell each step.
#[derive(Debug, Clone)]
pub(crate) struct Prim {
    /// Cells adjacent to the maze but not in it yet
    frontier: Vec<Coord>,
    /// Flat-indexed membership of `frontier`, for deduplication
    queued: Vec<bool>,
    last_added: Option<Coord>,
}

impl Prim {
    pub fn new(grid: &mut Grid) -> Self {
        let start = grid.start();
        grid[start].in_maze = true;
        let mut prim = Prim {
            frontier: Vec::new(),
            queued: vec![false; grid.len()],
            last_added: Some(start),
        };
        prim.add_frontier_neighbors(grid, start);
        prim
    }

    pub fn frontier(&self) -> &[Coord] {
        &self.frontier
    }

    pub fn is_queued(&self, index: usize) -> bool {
        self.queued.get(index).copied().unwrap_or(false)
    }

    pub fn last_added(&self) -> Option<Coord> {
        self.last_added
    }

    fn add_frontier_neighbors(&mut self, grid: &Grid, coord: Coord) {
        for neighbor in grid.neighbors(coord, true) {
            let idx = grid.ravel_index(neighbor);
            // Only queue the cell if it hasn't been added to the frontier before
            if !grid[neighbor].in_maze && !self.queued[idx] {
                self.queued[idx] = true;
                self.frontier.push(neighbor);
            }
        }
    }

    pub fn step(&mut self, grid: &mut Grid, rng: &mut StdRng) -> bool {
        if self.frontier.is_empty() {
            return true;
        }

        // Pick a random frontier cell and take it out of the set
        let frontier = self
            .frontier
            .swap_remove(rng.random_range(0..self.frontier.len()));
        self.queued[grid.ravel_index(frontier)] = false;

        let maze_neighbors = grid
            .neighbors(frontier, true)
            .filter(|&c| grid[c].in_maze)
            .collect::<Vec<_>>();

        if !maze_neighbors.is_empty() {
            let neighbor = maze_neighbors[rng.random_range(0..maze_neighbors.len())];
            // Carve a passage between the frontier and the maze
            grid.remove_wall_between(frontier, neighbor);
            grid[frontier].in_maze = true;
            self.last_added = Some(frontier);
            self.add_frontier_neighbors(grid, frontier);
        }
        false
    }
}
