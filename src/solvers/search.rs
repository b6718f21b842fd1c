use crate::maze::{Coord, Grid};

/// Per-run state of one cell, owned by a single solver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeState {
    pub visited: bool,
    /// Flat index of the cell this one was reached from
    pub parent: Option<usize>,
    /// `None` is an infinite distance
    pub distance: Option<u32>,
    pub heuristic: Option<u32>,
}

/// Outcome of advancing a strategy by one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    Found,
    Exhausted,
}

/// Bookkeeping shared by every solving strategy: the node arena indexed by
/// [`Grid::ravel_index`], counters, the current cell and the reconstructed path.
///
/// Nothing here is written back to the maze, so any number of searches can run
/// over the same grid at once.
///
/// Nodes carry the pass they were last written in. [`Search::clear_nodes`] starts
/// a new pass in constant time and nodes from older passes read as defaults.
#[derive(Debug, Clone)]
pub(crate) struct Search {
    nodes: Vec<NodeState>,
    stamps: Vec<u32>,
    pass: u32,
    start: usize,
    end: usize,
    visited_count: usize,
    path_length: usize,
    solution: Vec<Coord>,
    current: Option<usize>,
}

impl Search {
    pub fn new(grid: &Grid) -> Self {
        Search {
            nodes: vec![NodeState::default(); grid.len()],
            stamps: vec![0; grid.len()],
            pass: 0,
            start: grid.ravel_index(grid.start()),
            end: grid.ravel_index(grid.end()),
            visited_count: 0,
            path_length: 0,
            solution: Vec::new(),
            current: None,
        }
    }

    /// Forgets everything and puts the start cell back as the only visited one.
    pub fn reset(&mut self) {
        self.visited_count = 1;
        self.path_length = 0;
        self.solution.clear();
        self.clear_nodes();
    }

    /// Clears per-cell state but keeps the counters, for searches that restart
    /// from scratch mid-run.
    pub fn clear_nodes(&mut self) {
        match self.pass.checked_add(1) {
            Some(pass) => self.pass = pass,
            None => {
                self.stamps.fill(0);
                self.pass = 1;
            }
        }
        let start = self.node_mut(self.start);
        start.visited = true;
        start.distance = Some(0);
        self.current = Some(self.start);
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn node(&self, index: usize) -> NodeState {
        if self.stamps[index] == self.pass {
            self.nodes[index]
        } else {
            NodeState::default()
        }
    }

    pub fn node_mut(&mut self, index: usize) -> &mut NodeState {
        if self.stamps[index] != self.pass {
            self.stamps[index] = self.pass;
            self.nodes[index] = NodeState::default();
        }
        &mut self.nodes[index]
    }

    /// Every node of the current pass in index order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeState> + '_ {
        (0..self.nodes.len()).map(|index| self.node(index))
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.node(index).visited
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    pub fn path_length(&self) -> usize {
        self.path_length
    }

    pub fn solution(&self) -> &[Coord] {
        &self.solution
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn set_current(&mut self, index: usize) {
        self.current = Some(index);
    }

    /// Marks a cell visited. Returns `true` and counts it if it was not visited before.
    pub fn visit(&mut self, index: usize) -> bool {
        let node = self.node_mut(index);
        if node.visited {
            return false;
        }
        node.visited = true;
        self.visited_count += 1;
        true
    }

    /// Marks a cell visited and counts it even if it was visited before.
    pub fn revisit(&mut self, index: usize) {
        self.node_mut(index).visited = true;
        self.visited_count += 1;
    }

    /// Records `parent` as the way into `child`, one edge further than `parent`.
    pub fn relax(&mut self, child: usize, parent: usize, distance: u32) {
        let node = self.node_mut(child);
        node.parent = Some(parent);
        node.distance = Some(distance);
    }

    /// Visits `child` through `parent` with a unit edge.
    pub fn discover(&mut self, child: usize, parent: usize) {
        let distance = self.node(parent).distance.map_or(1, |d| d + 1);
        self.visit(child);
        self.relax(child, parent, distance);
    }

    /// Follows parent links back from the end cell.
    ///
    /// Stops at the start cell, at a missing parent, or after one pass over all
    /// cells, whichever comes first. The path length is the number of links walked.
    pub fn reconstruct_from_parents(&mut self, grid: &Grid) {
        let mut path = vec![grid.unravel_index(self.end)];
        let mut index = self.end;
        while index != self.start && path.len() <= self.nodes.len() {
            let Some(parent) = self.node(index).parent else {
                break;
            };
            path.push(grid.unravel_index(parent));
            index = parent;
        }
        path.reverse();
        self.set_solution(path);
    }

    /// Stores a start-to-end path.
    pub fn set_solution(&mut self, path: Vec<Coord>) {
        self.path_length = path.len().saturating_sub(1);
        self.solution = path;
    }
}
