pub mod app;
pub mod compare;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use compare::{Comparison, ComparisonReport};
pub use error::MazeError;
pub use generators::Generator;
pub use maze::{Coord, Maze};
pub use solvers::{Solver, SolverKind, create_solver};
