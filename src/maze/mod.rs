pub mod cell;
pub mod grid;

use rand::rngs::StdRng;

pub use cell::{Cell, Direction};
pub use grid::Grid;

use crate::{
    error::MazeError,
    generators::{GenerationRun, Generator, get_rng},
    solvers::SolveMarks,
};

/// `(row, col)` position of a cell.
pub type Coord = (u16, u16);

/// A grid maze together with the state of its stepwise generation.
///
/// Lifecycle: [`Maze::new`] prepares the default generator, [`Maze::set_generation_algorithm`]
/// resets every wall and re-seeds the working state, and repeated [`Maze::generate_step`]
/// calls carve passages until the completion flag is set. Only then can solvers bind to it.
pub struct Maze {
    grid: Grid,
    generator: Generator,
    run: GenerationRun,
    complete: bool,
    rng: StdRng,
}

impl Maze {
    /// Upper bound of generation steps per cell when fast-forwarding.
    pub const MAX_GENERATION_STEPS_PER_CELL: usize = 4;

    /// Creates a maze of the given size with all walls present and recursive
    /// backtracking prepared, drawing randomness from the OS.
    pub fn new(rows: u16, cols: u16) -> Result<Self, MazeError> {
        Maze::build(rows, cols, None)
    }

    /// Same as [`Maze::new`] but with a seeded random generator, so that the same
    /// seed and generator always carve the same maze.
    pub fn with_seed(rows: u16, cols: u16, seed: u64) -> Result<Self, MazeError> {
        Maze::build(rows, cols, Some(seed))
    }

    fn build(rows: u16, cols: u16, seed: Option<u64>) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let mut grid = Grid::new(rows, cols);
        let generator = Generator::default();
        let run = GenerationRun::prepare(generator, &mut grid);
        Ok(Maze {
            grid,
            generator,
            run,
            complete: false,
            rng: get_rng(seed),
        })
    }

    /// Builds an already generated maze from an explicit list of passages.
    ///
    /// Useful for hand-made layouts such as corridors, loops or sealed regions.
    pub fn from_passages(rows: u16, cols: u16, passages: &[(Coord, Coord)]) -> Result<Self, MazeError> {
        let mut maze = Maze::build(rows, cols, None)?;
        maze.grid.reset();
        for &(a, b) in passages {
            for coord in [a, b] {
                if !maze.grid.is_in_bounds(coord) {
                    return Err(MazeError::OutOfBounds(coord));
                }
            }
            if maze.grid.direction_between(a, b).is_none() {
                return Err(MazeError::NotAdjacent { a, b });
            }
            maze.grid.remove_wall_between(a, b);
        }
        maze.complete = true;
        Ok(maze)
    }

    pub fn rows(&self) -> u16 {
        self.grid.rows()
    }

    pub fn cols(&self) -> u16 {
        self.grid.cols()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.grid.start()
    }

    pub fn end(&self) -> Coord {
        self.grid.end()
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }

    pub fn is_generation_complete(&self) -> bool {
        self.complete
    }

    /// Selects the generation algorithm and starts over: all walls come back,
    /// every flag is cleared, and the algorithm's working state is seeded from
    /// the start cell.
    pub fn set_generation_algorithm(&mut self, generator: Generator) {
        self.generator = generator;
        self.complete = false;
        self.grid.reset();
        self.run = GenerationRun::prepare(generator, &mut self.grid);
        tracing::debug!(
            "[generate] prepared {} on a {}x{} grid",
            generator,
            self.rows(),
            self.cols()
        );
    }

    /// Advances generation by one step and returns whether it is complete.
    ///
    /// Generation-local flags (`visited`, `in_maze`) are cleared once the last
    /// step has run, leaving only walls and start/end roles behind.
    pub fn generate_step(&mut self) -> bool {
        if self.complete {
            return true;
        }
        let done = self.run.step(&mut self.grid, &mut self.rng);
        tracing::trace!("[generate] cursor at {:?}", self.run.cursor());
        if done {
            self.complete = true;
            self.grid.iter_mut().for_each(|cell| {
                cell.in_maze = false;
                cell.reset_path_data();
            });
            tracing::debug!(
                "[generate] {} complete, {} passages carved",
                self.generator,
                self.grid.removed_wall_count()
            );
        }
        self.complete
    }

    /// Runs generation to completion, bounded by
    /// `rows * cols * MAX_GENERATION_STEPS_PER_CELL` steps.
    ///
    /// Returns whether generation completed within the bound.
    pub fn generate_to_completion(&mut self) -> bool {
        let max_steps = self.grid.len() * Maze::MAX_GENERATION_STEPS_PER_CELL;
        for _ in 0..max_steps {
            if self.generate_step() {
                return true;
            }
        }
        tracing::warn!("[generate] gave up after {} steps", max_steps);
        self.complete
    }

    /// The cell generation is currently working on, while it is running.
    pub fn generation_cursor(&self) -> Option<Coord> {
        (!self.complete).then(|| self.run.cursor()).flatten()
    }

    /// Prim's frontier, empty for other generators and after completion.
    pub fn frontier(&self) -> &[Coord] {
        if self.complete { &[] } else { self.run.frontier() }
    }

    pub fn is_frontier(&self, coord: Coord) -> bool {
        !self.complete
            && self.grid.is_in_bounds(coord)
            && self.run.is_frontier(self.grid.ravel_index(coord))
    }

    /// Removes the wall between two adjacent cells, e.g. to open a loop in a
    /// generated maze.
    ///
    /// # Panics
    /// * If the cells are not orthogonally adjacent
    pub fn remove_wall_between(&mut self, a: Coord, b: Coord) {
        self.grid.remove_wall_between(a, b);
    }

    /// Clears all solve-related marks (visited, path, solution, distance, parent).
    /// Walls are untouched so the maze can be solved again without regenerating.
    pub fn clear_solution(&mut self) {
        self.grid.reset_all_path_data();
    }

    /// Clears visited marks only, keeping the displayed solution path.
    pub fn clear_path_only(&mut self) {
        self.grid.iter_mut().for_each(|cell| cell.visited = false);
    }

    /// Copies a solver's marks into the cells' rendering flags. Explored cells
    /// and solution cells both land on the path trail.
    pub fn apply_marks(&mut self, marks: &SolveMarks) {
        for (cell, mark) in self.grid.iter_mut().zip(marks.cells()) {
            cell.visited = mark.visited;
            cell.is_path = mark.visited || mark.on_solution;
            cell.is_solution = mark.on_solution;
            cell.distance = mark.distance;
            cell.heuristic = mark.heuristic.unwrap_or(0);
            cell.parent = mark.parent;
        }
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}
