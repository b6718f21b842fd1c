use std::time::Duration;

use pausable_clock::{PausableClock, PausableInstant};

mod astar;
mod bfs;
mod dead_end;
mod dfs;
mod dijkstra;
mod ids;
mod search;
mod wall_follower;

use astar::AStar;
use bfs::Bfs;
use dead_end::DeadEndFilling;
use dfs::Dfs;
use dijkstra::Dijkstra;
use ids::Ids;
use search::{Search, Step};
use wall_follower::WallFollower;

use crate::{
    error::MazeError,
    maze::{Coord, Grid, Maze},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    WallFollower,
    Dijkstra,
    DeadEndFilling,
    Bfs,
    Dfs,
    Ids,
    AStar,
}

impl SolverKind {
    pub const ALL: [SolverKind; 7] = [
        SolverKind::WallFollower,
        SolverKind::Dijkstra,
        SolverKind::DeadEndFilling,
        SolverKind::Bfs,
        SolverKind::Dfs,
        SolverKind::Ids,
        SolverKind::AStar,
    ];

    /// Stable name used to select the algorithm.
    pub fn id(&self) -> &'static str {
        match self {
            SolverKind::WallFollower => "wall_follower",
            SolverKind::Dijkstra => "dijkstra",
            SolverKind::DeadEndFilling => "dead_end_filling",
            SolverKind::Bfs => "bfs",
            SolverKind::Dfs => "dfs",
            SolverKind::Ids => "ids",
            SolverKind::AStar => "a_star",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            SolverKind::WallFollower => "Wall Follower (Right-Hand Rule)",
            SolverKind::Dijkstra => "Dijkstra's Algorithm",
            SolverKind::DeadEndFilling => "Dead-End Filling",
            SolverKind::Bfs => "Breadth-First Search (BFS)",
            SolverKind::Dfs => "Depth-First Search (DFS)",
            SolverKind::Ids => "Iterative Deepening Search (IDS)",
            SolverKind::AStar => "A* Search",
        }
    }
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for SolverKind {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolverKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| MazeError::UnknownAlgorithm(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Uninitialized,
    Running,
    Finished { solution_found: bool },
}

/// Per-algorithm step logic on top of the shared [`Search`] bookkeeping.
pub(crate) trait Strategy {
    /// Seeds the algorithm's own structures. `search` has just been reset.
    fn reset(&mut self, grid: &Grid, search: &mut Search);

    /// One bounded unit of work.
    fn advance(&mut self, grid: &Grid, search: &mut Search) -> Step;

    /// Builds the solution path once the end has been reached.
    fn reconstruct(&self, grid: &Grid, search: &mut Search) {
        search.reconstruct_from_parents(grid);
    }
}

#[derive(Debug, Clone)]
enum Algorithm {
    WallFollower(WallFollower),
    Dijkstra(Dijkstra),
    DeadEndFilling(DeadEndFilling),
    Bfs(Bfs),
    Dfs(Dfs),
    Ids(Ids),
    AStar(AStar),
}

impl Algorithm {
    fn new(kind: SolverKind, seed: Option<u64>) -> Self {
        match kind {
            SolverKind::WallFollower => Algorithm::WallFollower(WallFollower::default()),
            SolverKind::Dijkstra => Algorithm::Dijkstra(Dijkstra::default()),
            SolverKind::DeadEndFilling => Algorithm::DeadEndFilling(DeadEndFilling::default()),
            SolverKind::Bfs => Algorithm::Bfs(Bfs::default()),
            SolverKind::Dfs => Algorithm::Dfs(Dfs::default()),
            SolverKind::Ids => Algorithm::Ids(Ids::default()),
            SolverKind::AStar => Algorithm::AStar(AStar::new(seed)),
        }
    }

    fn strategy(&self) -> &dyn Strategy {
        match self {
            Algorithm::WallFollower(s) => s,
            Algorithm::Dijkstra(s) => s,
            Algorithm::DeadEndFilling(s) => s,
            Algorithm::Bfs(s) => s,
            Algorithm::Dfs(s) => s,
            Algorithm::Ids(s) => s,
            Algorithm::AStar(s) => s,
        }
    }

    fn strategy_mut(&mut self) -> &mut dyn Strategy {
        match self {
            Algorithm::WallFollower(s) => s,
            Algorithm::Dijkstra(s) => s,
            Algorithm::DeadEndFilling(s) => s,
            Algorithm::Bfs(s) => s,
            Algorithm::Dfs(s) => s,
            Algorithm::Ids(s) => s,
            Algorithm::AStar(s) => s,
        }
    }
}

/// A solver's view of one cell, for rendering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CellMark {
    pub visited: bool,
    pub on_solution: bool,
    pub distance: Option<u32>,
    pub heuristic: Option<u32>,
    pub parent: Option<Coord>,
}

/// Snapshot of a solver's per-cell state in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveMarks {
    cells: Vec<CellMark>,
}

impl SolveMarks {
    pub fn cells(&self) -> &[CellMark] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&CellMark> {
        self.cells.get(index)
    }
}

/// A solving algorithm bound to one generated maze.
///
/// The solver only reads the maze. Visited marks, parents and distances live in
/// the solver itself, so several solvers can be stepped over the same maze in
/// any interleaving. While any solver borrows the maze it cannot be regenerated.
pub struct Solver<'m> {
    kind: SolverKind,
    maze: &'m Maze,
    algorithm: Algorithm,
    search: Search,
    status: SolveStatus,
    clock: PausableClock,
    started: Option<PausableInstant>,
    elapsed: Duration,
    steps: usize,
}

impl<'m> Solver<'m> {
    /// Binds `kind` to `maze`. A* draws its tie-breakers from OS entropy.
    pub fn new(kind: SolverKind, maze: &'m Maze) -> Result<Self, MazeError> {
        Solver::build(kind, maze, None)
    }

    /// Like [`Solver::new`], with A*'s tie-breaking generator seeded.
    pub fn with_seed(kind: SolverKind, maze: &'m Maze, seed: u64) -> Result<Self, MazeError> {
        Solver::build(kind, maze, Some(seed))
    }

    pub(crate) fn build(
        kind: SolverKind,
        maze: &'m Maze,
        seed: Option<u64>,
    ) -> Result<Self, MazeError> {
        if !maze.is_generation_complete() {
            return Err(MazeError::GenerationIncomplete);
        }
        Ok(Solver {
            kind,
            maze,
            algorithm: Algorithm::new(kind, seed),
            search: Search::new(maze.grid()),
            status: SolveStatus::Uninitialized,
            clock: PausableClock::default(),
            started: None,
            elapsed: Duration::ZERO,
            steps: 0,
        })
    }

    /// Resets all per-run state and starts timing. Restarts a running or
    /// finished solver from scratch. A paused solver stays paused and its
    /// clock starts on the next [`Solver::resume`].
    pub fn initialize(&mut self) {
        let grid = self.maze.grid();
        self.search.reset();
        self.algorithm.strategy_mut().reset(grid, &mut self.search);
        self.status = SolveStatus::Running;
        self.steps = 0;
        self.elapsed = Duration::ZERO;
        self.clock = PausableClock::new(Duration::ZERO, self.clock.is_paused());
        self.started = Some(self.clock.now());
        tracing::debug!(
            "[solver] {} initialized on a {}x{} maze",
            self.kind,
            self.maze.rows(),
            self.maze.cols()
        );
    }

    /// Advances one unit of work. Returns `true` once the solver has finished,
    /// either at the end cell or with nothing left to explore.
    ///
    /// Stepping a finished solver does nothing. Stepping an uninitialized one
    /// initializes it first.
    pub fn step(&mut self) -> bool {
        match self.status {
            SolveStatus::Finished { .. } => return true,
            SolveStatus::Uninitialized => self.initialize(),
            SolveStatus::Running => {}
        }

        let grid = self.maze.grid();
        self.steps += 1;
        let outcome = self.algorithm.strategy_mut().advance(grid, &mut self.search);
        tracing::trace!(
            "[solver] {} step {}: {:?} at {:?}",
            self.kind.id(),
            self.steps,
            outcome,
            self.current()
        );
        match outcome {
            Step::Continue => false,
            Step::Found => {
                self.algorithm.strategy().reconstruct(grid, &mut self.search);
                self.finish(true);
                true
            }
            Step::Exhausted => {
                self.finish(false);
                true
            }
        }
    }

    /// Steps until finished. Every algorithm terminates on a finite grid.
    pub fn run_to_completion(&mut self) -> bool {
        while !self.step() {}
        self.solution_found()
    }

    fn finish(&mut self, solution_found: bool) {
        self.elapsed = self.live_elapsed();
        self.status = SolveStatus::Finished { solution_found };
        tracing::info!(
            "[solver] {} finished: solution found: {}, path length: {}, visited: {}, steps: {}, elapsed: {:?}",
            self.kind,
            solution_found,
            self.path_length(),
            self.visited_count(),
            self.steps,
            self.elapsed
        );
    }

    fn live_elapsed(&self) -> Duration {
        self.started
            .map_or(Duration::ZERO, |started| started.elapsed(&self.clock))
    }

    /// Stops the clock. Time spent paused is not counted as elapsed.
    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn kind(&self) -> SolverKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.label()
    }

    pub fn maze(&self) -> &'m Maze {
        self.maze
    }

    pub fn status(&self) -> SolveStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, SolveStatus::Finished { .. })
    }

    pub fn solution_found(&self) -> bool {
        matches!(
            self.status,
            SolveStatus::Finished {
                solution_found: true
            }
        )
    }

    /// Live while running, frozen once finished.
    pub fn elapsed_time(&self) -> Duration {
        match self.status {
            SolveStatus::Running => self.live_elapsed(),
            _ => self.elapsed,
        }
    }

    pub fn visited_count(&self) -> usize {
        self.search.visited_count()
    }

    /// Number of moves on the reconstructed path, 0 until a solution is found.
    pub fn path_length(&self) -> usize {
        self.search.path_length()
    }

    /// Start-to-end solution, empty until a solution is found.
    pub fn solution_path(&self) -> &[Coord] {
        self.search.solution()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn current(&self) -> Option<Coord> {
        let grid = self.maze.grid();
        self.search.current().map(|index| grid.unravel_index(index))
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        let grid = self.maze.grid();
        grid.is_in_bounds(coord).then(|| grid.ravel_index(coord))
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.index_of(coord)
            .is_some_and(|index| self.search.is_visited(index))
    }

    pub fn parent(&self, coord: Coord) -> Option<Coord> {
        let index = self.index_of(coord)?;
        let parent = self.search.node(index).parent?;
        Some(self.maze.grid().unravel_index(parent))
    }

    pub fn distance(&self, coord: Coord) -> Option<u32> {
        let index = self.index_of(coord)?;
        self.search.node(index).distance
    }

    /// Snapshot of this solver's state for [`Maze::apply_marks`].
    pub fn marks(&self) -> SolveMarks {
        let grid = self.maze.grid();
        let mut cells = self
            .search
            .nodes()
            .map(|node| CellMark {
                visited: node.visited,
                on_solution: false,
                distance: node.distance,
                heuristic: node.heuristic,
                parent: node.parent.map(|p| grid.unravel_index(p)),
            })
            .collect::<Vec<_>>();
        for &coord in self.search.solution() {
            cells[grid.ravel_index(coord)].on_solution = true;
        }
        SolveMarks { cells }
    }
}

/// Builds the solver registered under `name`, bound to `maze`.
pub fn create_solver<'m>(name: &str, maze: &'m Maze) -> Result<Solver<'m>, MazeError> {
    Solver::new(name.parse()?, maze)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::generators::Generator;

    fn generated(rows: u16, cols: u16, generator: Generator, seed: u64) -> Maze {
        let mut maze = Maze::with_seed(rows, cols, seed).unwrap();
        maze.set_generation_algorithm(generator);
        assert!(maze.generate_to_completion());
        maze
    }

    /// Moves from start to end over open walls, independent of any solver.
    fn tree_distance(maze: &Maze) -> Option<usize> {
        let grid = maze.grid();
        let mut dist = vec![None; grid.len()];
        dist[grid.ravel_index(maze.start())] = Some(0);
        let mut queue = VecDeque::from([maze.start()]);
        while let Some(cell) = queue.pop_front() {
            let d = dist[grid.ravel_index(cell)].unwrap();
            for next in grid.neighbors(cell, false) {
                let idx = grid.ravel_index(next);
                if dist[idx].is_none() {
                    dist[idx] = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }
        dist[grid.ravel_index(maze.end())]
    }

    fn solve(kind: SolverKind, maze: &Maze) -> Solver<'_> {
        let mut solver = Solver::with_seed(kind, maze, 7).unwrap();
        solver.initialize();
        solver.run_to_completion();
        solver
    }

    fn assert_valid_path(solver: &Solver<'_>, maze: &Maze) {
        let path = solver.solution_path();
        assert_eq!(path.first(), Some(&maze.start()));
        assert_eq!(path.last(), Some(&maze.end()));
        assert_eq!(path.len(), solver.path_length() + 1);
        for pair in path.windows(2) {
            assert!(maze.grid().is_open_between(pair[0], pair[1]));
        }
    }

    #[test]
    fn test_solver_names() {
        for kind in SolverKind::ALL {
            assert_eq!(kind.id().parse::<SolverKind>(), Ok(kind));
        }
        assert_eq!("a_star".parse::<SolverKind>(), Ok(SolverKind::AStar));
        assert_eq!(SolverKind::Bfs.to_string(), "Breadth-First Search (BFS)");
    }

    #[test]
    fn test_create_solver_rejects_unknown_names() {
        let maze = generated(3, 3, Generator::RecurBacktrack, 0);
        let solver = create_solver("dead_end_filling", &maze).unwrap();
        assert_eq!(solver.kind(), SolverKind::DeadEndFilling);
        assert_eq!(
            create_solver("greedy", &maze).err(),
            Some(MazeError::UnknownAlgorithm("greedy".to_string()))
        );
    }

    #[test]
    fn test_solver_requires_generated_maze() {
        let maze = Maze::with_seed(3, 3, 0).unwrap();
        assert_eq!(
            Solver::new(SolverKind::Bfs, &maze).err(),
            Some(MazeError::GenerationIncomplete)
        );
    }

    #[test]
    fn test_bfs_path_is_tree_distance() {
        let maze = generated(5, 5, Generator::RecurBacktrack, 2024);
        let solver = solve(SolverKind::Bfs, &maze);
        assert!(solver.solution_found());
        assert_eq!(Some(solver.path_length()), tree_distance(&maze));
        assert_valid_path(&solver, &maze);
    }

    #[test]
    fn test_all_solvers_find_the_unique_path_in_perfect_mazes() {
        for generator in Generator::ALL {
            for seed in 0..4 {
                let maze = generated(6, 8, generator, seed);
                let expected = tree_distance(&maze);
                for kind in SolverKind::ALL {
                    let solver = solve(kind, &maze);
                    assert!(solver.solution_found(), "{kind} failed on seed {seed}");
                    assert_valid_path(&solver, &maze);
                    if kind == SolverKind::WallFollower {
                        // The walked path may keep detours into dead ends
                        assert!(Some(solver.path_length()) >= expected, "{kind} on seed {seed}");
                    } else {
                        assert_eq!(Some(solver.path_length()), expected, "{kind} on seed {seed}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_shortest_path_solvers_agree_with_loops() {
        for seed in 0..6 {
            let mut maze = generated(7, 7, Generator::Prim, seed);
            // Open a row and a column of extra passages to create cycles
            for col in 0..6 {
                maze.remove_wall_between((3, col), (3, col + 1));
            }
            for row in 0..6 {
                maze.remove_wall_between((row, 2), (row + 1, 2));
            }
            let expected = tree_distance(&maze).unwrap();
            for kind in [SolverKind::Bfs, SolverKind::Dijkstra, SolverKind::AStar, SolverKind::Ids] {
                let solver = solve(kind, &maze);
                assert!(solver.solution_found());
                assert_eq!(solver.path_length(), expected, "{kind} on seed {seed}");
                assert_valid_path(&solver, &maze);
            }
        }
    }

    fn outcome(solver: &Solver<'_>) -> (bool, usize, usize, usize, Vec<Coord>) {
        (
            solver.solution_found(),
            solver.path_length(),
            solver.visited_count(),
            solver.steps(),
            solver.solution_path().to_vec(),
        )
    }

    #[test]
    fn test_reinitialize_reproduces_result() {
        let mut maze = generated(8, 8, Generator::RecurBacktrack, 99);
        for kind in SolverKind::ALL {
            let (first, marks) = {
                let mut solver = Solver::with_seed(kind, &maze, 5).unwrap();
                solver.run_to_completion();
                let first = outcome(&solver);

                solver.initialize();
                assert_eq!(solver.status(), SolveStatus::Running);
                assert_eq!(solver.visited_count(), 1);
                assert_eq!(solver.path_length(), 0);
                solver.run_to_completion();
                assert_eq!(outcome(&solver), first, "{kind}");
                (first, solver.marks())
            };

            // Render the run, wipe it and solve the same walls again
            maze.apply_marks(&marks);
            maze.clear_solution();
            assert!(
                maze.grid()
                    .iter()
                    .all(|c| !c.visited && !c.is_path && !c.is_solution && c.parent.is_none())
            );
            let mut solver = Solver::with_seed(kind, &maze, 5).unwrap();
            solver.initialize();
            solver.run_to_completion();
            assert_eq!(outcome(&solver), first, "{kind}");
        }
    }

    #[test]
    fn test_step_lifecycle() {
        let maze = generated(4, 4, Generator::Prim, 1);
        let mut solver = Solver::new(SolverKind::Dfs, &maze).unwrap();
        assert_eq!(solver.status(), SolveStatus::Uninitialized);
        assert_eq!(solver.elapsed_time(), Duration::ZERO);

        // First step initializes
        solver.step();
        assert_eq!(solver.steps(), 1);
        assert!(solver.is_visited(maze.start()));

        solver.run_to_completion();
        assert!(solver.is_finished());
        let (steps, elapsed) = (solver.steps(), solver.elapsed_time());
        assert!(solver.step());
        assert!(solver.step());
        assert_eq!(solver.steps(), steps);
        assert_eq!(solver.elapsed_time(), elapsed);
    }

    #[test]
    fn test_single_cell_maze() {
        let mut maze = Maze::with_seed(1, 1, 0).unwrap();
        assert!(maze.generate_to_completion());
        for kind in SolverKind::ALL {
            let mut solver = Solver::new(kind, &maze).unwrap();
            assert!(solver.step());
            assert!(solver.solution_found());
            assert_eq!(solver.path_length(), 0);
            assert_eq!(solver.solution_path(), &[(0, 0)]);
        }
    }

    #[test]
    fn test_unreachable_end_is_a_normal_failure() {
        // End cell (1, 2) has all four walls
        let maze = Maze::from_passages(
            2,
            3,
            &[((0, 0), (0, 1)), ((0, 1), (0, 2)), ((0, 0), (1, 0)), ((1, 0), (1, 1))],
        )
        .unwrap();
        for kind in SolverKind::ALL {
            let mut solver = solve(kind, &maze);
            assert_eq!(
                solver.status(),
                SolveStatus::Finished {
                    solution_found: false
                },
                "{kind}"
            );
            assert_eq!(solver.path_length(), 0);
            assert!(solver.solution_path().is_empty());
            assert!(solver.step());
        }
    }

    #[test]
    fn test_dead_end_filling_on_corridor() {
        // Snake through a 3x3 grid: no cell besides start and end has a single opening
        let maze = Maze::from_passages(
            3,
            3,
            &[
                ((0, 0), (0, 1)),
                ((0, 1), (0, 2)),
                ((0, 2), (1, 2)),
                ((1, 2), (1, 1)),
                ((1, 1), (1, 0)),
                ((1, 0), (2, 0)),
                ((2, 0), (2, 1)),
                ((2, 1), (2, 2)),
            ],
        )
        .unwrap();
        let filling = solve(SolverKind::DeadEndFilling, &maze);
        let dfs = solve(SolverKind::Dfs, &maze);
        assert!(filling.solution_found());
        assert_eq!(filling.visited_count(), dfs.visited_count());
        assert_eq!(filling.visited_count(), 9);
        assert_eq!(filling.steps(), dfs.steps());
        assert_eq!(filling.path_length(), 8);
    }

    #[test]
    fn test_dead_end_filling_counts_filled_cells() {
        // Corridor along the top row with two stubs hanging below it
        let maze = Maze::from_passages(
            2,
            3,
            &[
                ((0, 0), (0, 1)),
                ((0, 1), (0, 2)),
                ((0, 2), (1, 2)),
                ((0, 0), (1, 0)),
                ((0, 1), (1, 1)),
            ],
        )
        .unwrap();
        let mut solver = Solver::new(SolverKind::DeadEndFilling, &maze).unwrap();
        solver.initialize();
        // Two filling steps for (1, 0) and (1, 1)
        assert!(!solver.step());
        assert_eq!(solver.current(), Some((1, 0)));
        assert_eq!(solver.parent((1, 0)), Some((0, 0)));
        assert!(!solver.step());
        assert_eq!(solver.current(), Some((1, 1)));

        solver.run_to_completion();
        assert!(solver.solution_found());
        assert_eq!(solver.solution_path(), &[(0, 0), (0, 1), (0, 2), (1, 2)]);
        // Start, two dead ends, then (0, 1), (0, 2), (1, 2) discovered by the search
        assert_eq!(solver.visited_count(), 6);
    }

    #[test]
    fn test_ids_forgets_cells_on_each_deepening() {
        let maze = Maze::from_passages(1, 3, &[((0, 0), (0, 1)), ((0, 1), (0, 2))]).unwrap();
        let mut solver = Solver::new(SolverKind::Ids, &maze).unwrap();
        solver.initialize();

        // Depth 0 prunes (0, 1), then the next step deepens to 1
        assert!(!solver.step());
        assert!(!solver.step());
        assert_eq!(solver.current(), Some((0, 0)));
        assert!(!solver.is_visited((0, 1)));

        assert!(!solver.step());
        assert!(solver.is_visited((0, 1)));
        assert_eq!(solver.distance((0, 1)), Some(1));
        assert!(!solver.step());
        // Deepening to 2 starts a clean pass
        assert!(!solver.step());
        assert!(!solver.is_visited((0, 1)));
        assert_eq!(solver.distance((0, 1)), None);

        solver.run_to_completion();
        assert!(solver.solution_found());
        assert_eq!(solver.steps(), 8);
        assert_eq!(solver.solution_path(), &[(0, 0), (0, 1), (0, 2)]);
        // Start plus (0, 1) twice and (0, 2) once across passes
        assert_eq!(solver.visited_count(), 4);
    }

    #[test]
    fn test_wall_follower_reconstructs_walked_path() {
        // (1, 0) is a dead end the walker enters and backs out of
        let maze = Maze::from_passages(
            2,
            3,
            &[((0, 0), (1, 0)), ((0, 0), (0, 1)), ((0, 1), (0, 2)), ((0, 2), (1, 2))],
        )
        .unwrap();
        let solver = solve(SolverKind::WallFollower, &maze);
        assert!(solver.solution_found());
        assert_eq!(solver.steps(), 5);
        assert_eq!(solver.visited_count(), 5);
        assert_eq!(solver.solution_path(), &[(0, 0), (0, 1), (0, 2), (1, 2)]);
        assert_eq!(solver.path_length(), 3);
    }

    #[test]
    fn test_wall_follower_keeps_detours_after_leaving_start() {
        // (1, 1) is a dead end below (0, 1), entered after the start was left
        let maze = Maze::from_passages(
            2,
            3,
            &[((0, 0), (0, 1)), ((0, 1), (1, 1)), ((0, 1), (0, 2)), ((0, 2), (1, 2))],
        )
        .unwrap();
        let solver = solve(SolverKind::WallFollower, &maze);
        assert!(solver.solution_found());
        assert_eq!(solver.steps(), 5);
        assert_eq!(
            solver.solution_path(),
            &[(0, 0), (0, 1), (1, 1), (0, 1), (0, 2), (1, 2)]
        );
        assert_eq!(solver.path_length(), 5);
        assert_valid_path(&solver, &maze);
    }

    #[test]
    fn test_wall_follower_gives_up_in_a_loop() {
        // A cycle around the top-left 2x2 block with a spur; the end is sealed off
        let maze = Maze::from_passages(
            2,
            3,
            &[
                ((0, 0), (0, 1)),
                ((0, 1), (1, 1)),
                ((1, 1), (1, 0)),
                ((1, 0), (0, 0)),
                ((0, 1), (0, 2)),
            ],
        )
        .unwrap();
        let solver = solve(SolverKind::WallFollower, &maze);
        assert!(solver.is_finished());
        assert!(!solver.solution_found());
        assert_eq!(solver.steps(), 7);
        assert_eq!(solver.current(), Some((1, 0)));
    }

    #[test]
    fn test_round_robin_solvers_are_isolated() {
        let maze = generated(9, 9, Generator::RecurBacktrack, 31);
        let alone_bfs = solve(SolverKind::Bfs, &maze);
        let alone_dfs = solve(SolverKind::Dfs, &maze);

        let mut bfs = Solver::new(SolverKind::Bfs, &maze).unwrap();
        let mut dfs = Solver::new(SolverKind::Dfs, &maze).unwrap();
        bfs.initialize();
        dfs.initialize();
        while !(bfs.is_finished() && dfs.is_finished()) {
            bfs.step();
            dfs.step();
        }

        for (together, alone) in [(&bfs, &alone_bfs), (&dfs, &alone_dfs)] {
            assert_eq!(together.path_length(), alone.path_length());
            assert_eq!(together.visited_count(), alone.visited_count());
            assert_eq!(together.solution_path(), alone.solution_path());
        }
        // The maze itself was never marked
        assert!(maze.grid().iter().all(|cell| !cell.visited && !cell.is_solution));
    }

    #[test]
    fn test_pause_excludes_paused_time() {
        let maze = generated(5, 5, Generator::Prim, 4);
        let mut solver = Solver::new(SolverKind::Bfs, &maze).unwrap();
        solver.initialize();
        solver.pause();
        assert!(solver.is_paused());
        std::thread::sleep(Duration::from_millis(200));
        solver.resume();
        solver.run_to_completion();
        assert!(solver.elapsed_time() < Duration::from_millis(200));
    }

    #[test]
    fn test_initialize_keeps_pause() {
        let maze = generated(5, 5, Generator::Prim, 4);
        let mut solver = Solver::new(SolverKind::Dfs, &maze).unwrap();
        solver.initialize();
        solver.pause();
        solver.initialize();
        assert!(solver.is_paused());
        std::thread::sleep(Duration::from_millis(200));
        assert!(solver.elapsed_time() < Duration::from_millis(200));

        solver.resume();
        assert!(!solver.is_paused());
        solver.run_to_completion();
        assert!(solver.elapsed_time() < Duration::from_millis(200));
    }

    #[test]
    fn test_marks_project_onto_maze() {
        let mut maze = generated(5, 6, Generator::RecurBacktrack, 8);
        let marks = {
            let solver = solve(SolverKind::AStar, &maze);
            assert_eq!(solver.distance(maze.start()), Some(0));
            assert_eq!(solver.parent(maze.start()), None);
            assert_eq!(solver.distance((9, 9)), None);
            solver.marks()
        };
        let on_path = marks.cells().iter().filter(|m| m.on_solution).count();
        let explored = marks
            .cells()
            .iter()
            .filter(|m| m.visited || m.on_solution)
            .count();
        assert!(explored >= on_path);

        maze.apply_marks(&marks);
        assert_eq!(maze.grid().iter().filter(|c| c.is_solution).count(), on_path);
        assert_eq!(tree_distance(&maze), Some(on_path - 1));
        assert!(maze[maze.start()].visited);
        // The trail covers the whole search, not only the solution
        assert_eq!(maze.grid().iter().filter(|c| c.is_path).count(), explored);
        assert!(maze.grid().iter().all(|c| c.is_path || !c.is_solution));

        maze.clear_path_only();
        assert!(maze.grid().iter().all(|c| !c.visited));
        assert_eq!(maze.grid().iter().filter(|c| c.is_path).count(), explored);
        assert_eq!(maze.grid().iter().filter(|c| c.is_solution).count(), on_path);
    }
}
