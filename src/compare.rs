use std::time::Duration;

use crate::{
    error::MazeError,
    maze::Maze,
    solvers::{SolveStatus, Solver, SolverKind},
};

/// Result line of one algorithm in a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverSummary {
    pub kind: SolverKind,
    pub name: &'static str,
    pub status: SolveStatus,
    pub path_length: usize,
    pub visited_count: usize,
    pub steps: usize,
    pub elapsed: Duration,
}

impl From<&Solver<'_>> for SolverSummary {
    fn from(solver: &Solver<'_>) -> Self {
        SolverSummary {
            kind: solver.kind(),
            name: solver.name(),
            status: solver.status(),
            path_length: solver.path_length(),
            visited_count: solver.visited_count(),
            steps: solver.steps(),
            elapsed: solver.elapsed_time(),
        }
    }
}

impl SolverSummary {
    pub fn solution_found(&self) -> bool {
        matches!(
            self.status,
            SolveStatus::Finished {
                solution_found: true
            }
        )
    }
}

/// Aggregated metrics. Leaders are picked among the algorithms that found a
/// solution; ties go to the one listed first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub entries: Vec<SolverSummary>,
    pub shortest: Option<SolverKind>,
    pub fewest_visited: Option<SolverKind>,
    pub fastest: Option<SolverKind>,
}

impl ComparisonReport {
    fn new(entries: Vec<SolverSummary>) -> Self {
        let leader = |key: fn(&SolverSummary) -> u128| {
            entries
                .iter()
                .filter(|entry| entry.solution_found())
                .min_by_key(|entry| key(entry))
                .map(|entry| entry.kind)
        };
        let shortest = leader(|e| e.path_length as u128);
        let fewest_visited = leader(|e| e.visited_count as u128);
        let fastest = leader(|e| e.elapsed.as_nanos());
        ComparisonReport {
            entries,
            shortest,
            fewest_visited,
            fastest,
        }
    }
}

/// 2 to 4 solvers stepped round-robin over one shared maze.
pub struct Comparison<'m> {
    solvers: Vec<Solver<'m>>,
    rounds: usize,
}

impl<'m> Comparison<'m> {
    pub const MIN_SOLVERS: usize = 2;
    pub const MAX_SOLVERS: usize = 4;

    /// Builds and initializes the named algorithms.
    pub fn new(maze: &'m Maze, names: &[&str]) -> Result<Self, MazeError> {
        let kinds = names
            .iter()
            .map(|name| name.parse::<SolverKind>())
            .collect::<Result<Vec<_>, _>>()?;
        Comparison::from_kinds(maze, &kinds, None)
    }

    /// Same as [`Comparison::new`] with already parsed kinds. A seed, when given,
    /// is shared by every algorithm that draws random numbers.
    pub fn from_kinds(
        maze: &'m Maze,
        kinds: &[SolverKind],
        seed: Option<u64>,
    ) -> Result<Self, MazeError> {
        if !(Comparison::MIN_SOLVERS..=Comparison::MAX_SOLVERS).contains(&kinds.len()) {
            return Err(MazeError::ComparisonSize(kinds.len()));
        }
        for (i, kind) in kinds.iter().enumerate() {
            if kinds[..i].contains(kind) {
                return Err(MazeError::DuplicateAlgorithm(kind.id().to_string()));
            }
        }

        let mut solvers = kinds
            .iter()
            .map(|&kind| Solver::build(kind, maze, seed))
            .collect::<Result<Vec<_>, _>>()?;
        solvers.iter_mut().for_each(Solver::initialize);
        tracing::debug!(
            "[compare] started {}",
            kinds.iter().map(SolverKind::id).collect::<Vec<_>>().join(", ")
        );
        Ok(Comparison { solvers, rounds: 0 })
    }

    /// Steps every unfinished solver once. Returns whether all are finished.
    pub fn step_round(&mut self) -> bool {
        if self.is_finished() {
            return true;
        }
        self.rounds += 1;
        for solver in self.solvers.iter_mut().filter(|s| !s.is_finished()) {
            solver.step();
        }
        self.is_finished()
    }

    pub fn run_to_completion(&mut self) -> ComparisonReport {
        while !self.step_round() {}
        tracing::info!("[compare] all solvers finished after {} rounds", self.rounds);
        self.report()
    }

    pub fn is_finished(&self) -> bool {
        self.solvers.iter().all(Solver::is_finished)
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn pause(&mut self) {
        self.solvers.iter_mut().for_each(Solver::pause);
    }

    pub fn resume(&mut self) {
        self.solvers.iter_mut().for_each(Solver::resume);
    }

    pub fn solvers(&self) -> &[Solver<'m>] {
        &self.solvers
    }

    pub fn report(&self) -> ComparisonReport {
        ComparisonReport::new(self.solvers.iter().map(SolverSummary::from).collect())
    }
}
