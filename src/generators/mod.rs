use rand::{SeedableRng, rngs::StdRng};

mod prim;
mod recur_backtrack;

pub(crate) use prim::Prim;
pub(crate) use recur_backtrack::RecurBacktrack;

use crate::{
    error::MazeError,
    maze::{Coord, Grid},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub(crate) fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    #[default]
    RecurBacktrack,
    Prim,
}

impl Generator {
    pub const ALL: [Generator; 2] = [Generator::RecurBacktrack, Generator::Prim];

    /// Stable name used to select the generator.
    pub fn id(&self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "recursive_backtracking",
            Generator::Prim => "prims_algorithm",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|generator| generator.id() == s)
            .ok_or_else(|| MazeError::UnknownGenerator(s.to_string()))
    }
}

/// Working state of an in-progress generation.
#[derive(Debug, Clone)]
pub(crate) enum GenerationRun {
    RecurBacktrack(RecurBacktrack),
    Prim(Prim),
}

impl GenerationRun {
    /// Seeds the working state of `generator` on a freshly reset grid.
    pub fn prepare(generator: Generator, grid: &mut Grid) -> Self {
        match generator {
            Generator::RecurBacktrack => GenerationRun::RecurBacktrack(RecurBacktrack::new(grid)),
            Generator::Prim => GenerationRun::Prim(Prim::new(grid)),
        }
    }

    /// Advances one step. Returns `true` once there is nothing left to do.
    pub fn step(&mut self, grid: &mut Grid, rng: &mut StdRng) -> bool {
        match self {
            GenerationRun::RecurBacktrack(run) => run.step(grid, rng),
            GenerationRun::Prim(run) => run.step(grid, rng),
        }
    }

    pub fn cursor(&self) -> Option<Coord> {
        match self {
            GenerationRun::RecurBacktrack(run) => run.current(),
            GenerationRun::Prim(run) => run.last_added(),
        }
    }

    pub fn frontier(&self) -> &[Coord] {
        match self {
            GenerationRun::RecurBacktrack(_) => &[],
            GenerationRun::Prim(run) => run.frontier(),
        }
    }

    pub fn is_frontier(&self, index: usize) -> bool {
        match self {
            GenerationRun::RecurBacktrack(_) => false,
            GenerationRun::Prim(run) => run.is_queued(index),
        }
    }
}
