use std::{
    io::{self, Write},
    path::PathBuf,
    time::Duration,
};

use crossterm::{
    queue,
    style::{self, Stylize},
};
use tracing_appender::{non_blocking::WorkerGuard, rolling};

use crate::{
    compare::{Comparison, ComparisonReport, SolverSummary},
    error::MazeError,
    generators::Generator,
    maze::{Cell, Direction, Maze},
    solvers::{SolveMarks, Solver, SolverKind},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub rows: u16,
    pub cols: u16,
    pub generator: Generator,
    /// One solver runs alone, two to four run as a comparison
    pub solvers: Vec<SolverKind>,
    /// Seed for generation and A* tie-breaking, OS entropy when unset
    pub seed: Option<u64>,
    /// Draw the solved maze after the summary
    pub show_maze: bool,
    pub log_dir: PathBuf,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            rows: 15,
            cols: 15,
            generator: Generator::default(),
            solvers: vec![SolverKind::Bfs],
            seed: None,
            show_maze: false,
            log_dir: PathBuf::from("."),
            verbose: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct App {
    config: AppConfig,
}

impl App {
    pub const LOG_FILE: &'static str = "mazestep.log";

    pub fn new(config: AppConfig) -> Self {
        App { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Installs a file subscriber. Keep the guard alive until the program exits,
    /// dropping it flushes buffered log lines.
    pub fn init_logging(&self) -> io::Result<WorkerGuard> {
        let appender = rolling::RollingFileAppender::builder()
            .rotation(rolling::Rotation::NEVER)
            .filename_prefix(App::LOG_FILE)
            .build(&self.config.log_dir)
            .map_err(io::Error::other)?;
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let level = if self.config.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .with_max_level(level)
            .try_init()
            .map_err(io::Error::other)?;
        Ok(guard)
    }

    fn build_maze(&self, seed: Option<u64>) -> Result<Maze, MazeError> {
        let AppConfig { rows, cols, .. } = self.config;
        let mut maze = match seed {
            Some(seed) => Maze::with_seed(rows, cols, seed)?,
            None => Maze::new(rows, cols)?,
        };
        maze.set_generation_algorithm(self.config.generator);
        if !maze.generate_to_completion() {
            return Err(MazeError::GenerationIncomplete);
        }
        Ok(maze)
    }

    /// Generates one maze, solves it with the configured algorithms and prints
    /// the results.
    pub fn run(&self) -> io::Result<()> {
        let config = &self.config;
        tracing::info!(
            "Started run: {}x{} maze, {}, seed {:?}",
            config.rows,
            config.cols,
            config.generator,
            config.seed
        );
        let mut maze = self.build_maze(config.seed)?;
        let mut stdout = io::stdout();

        let marks: SolveMarks = match config.solvers.as_slice() {
            [kind] => {
                let mut solver = Solver::build(*kind, &maze, config.seed)?;
                solver.run_to_completion();
                App::print_summary(&mut stdout, &maze, &[SolverSummary::from(&solver)], None)?;
                solver.marks()
            }
            kinds => {
                let mut comparison = Comparison::from_kinds(&maze, kinds, config.seed)?;
                let report = comparison.run_to_completion();
                App::print_summary(&mut stdout, &maze, &report.entries, Some(&report))?;
                // Show the shortest solution, or the first algorithm's search if none
                let solvers = comparison.solvers();
                report
                    .shortest
                    .and_then(|kind| solvers.iter().find(|s| s.kind() == kind))
                    .unwrap_or(&solvers[0])
                    .marks()
            }
        };

        if config.show_maze {
            maze.apply_marks(&marks);
            queue!(stdout, style::Print(draw_maze(&maze)))?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn print_summary(
        stdout: &mut impl Write,
        maze: &Maze,
        entries: &[SolverSummary],
        report: Option<&ComparisonReport>,
    ) -> io::Result<()> {
        let title = format!(
            "{}x{} maze generated with {}\n",
            maze.rows(),
            maze.cols(),
            maze.generator()
        );
        let header = format!(
            "{:<34} {:>8} {:>8} {:>8} {:>12}\n",
            "Algorithm", "Path", "Visited", "Steps", "Time"
        );
        queue!(
            stdout,
            style::PrintStyledContent(title.bold()),
            style::PrintStyledContent(header.underlined())
        )?;

        for entry in entries {
            let outcome = if entry.solution_found() {
                format!("{:>8}", entry.path_length).green()
            } else {
                format!("{:>8}", "none").red()
            };
            queue!(
                stdout,
                style::Print(format!("{:<34} ", entry.name)),
                style::PrintStyledContent(outcome),
                style::Print(format!(
                    " {:>8} {:>8} {:>12}\n",
                    entry.visited_count,
                    entry.steps,
                    format_duration(entry.elapsed)
                ))
            )?;
        }

        if let Some(report) = report {
            let leaders = [
                ("Shortest path", report.shortest),
                ("Fewest visited cells", report.fewest_visited),
                ("Fastest", report.fastest),
            ];
            for (label, kind) in leaders {
                let name = kind.map_or("-", |kind| kind.label());
                queue!(
                    stdout,
                    style::Print(format!("{label}: ")),
                    style::PrintStyledContent(name.cyan()),
                    style::Print("\n")
                )?;
            }
        }
        Ok(())
    }

    /// Repeats generation and every solver `iterations` times and prints the
    /// average cost of each algorithm.
    pub fn profile(&self, iterations: usize) -> io::Result<()> {
        let iterations = iterations.max(1);
        let mut totals = SolverKind::ALL.map(|kind| (kind, 0usize, 0usize, Duration::ZERO));

        for i in 0..iterations {
            let seed = self.config.seed.map(|seed| seed.wrapping_add(i as u64));
            let maze = self.build_maze(seed)?;
            for (kind, steps, visited, elapsed) in totals.iter_mut() {
                let mut solver = Solver::build(*kind, &maze, seed)?;
                solver.run_to_completion();
                *steps += solver.steps();
                *visited += solver.visited_count();
                *elapsed += solver.elapsed_time();
            }
            tracing::debug!("Profile iteration {} done", i + 1);
        }

        let mut stdout = io::stdout();
        queue!(
            stdout,
            style::PrintStyledContent(
                format!(
                    "Average over {} {}x{} mazes ({})\n",
                    iterations, self.config.rows, self.config.cols, self.config.generator
                )
                .bold()
            )
        )?;
        let n = iterations as u32;
        for (kind, steps, visited, elapsed) in totals {
            queue!(
                stdout,
                style::Print(format!(
                    "{:<34} {:>10} steps {:>10} visited {:>12}\n",
                    kind.label(),
                    steps / iterations,
                    visited / iterations,
                    format_duration(elapsed / n)
                ))
            )?;
        }
        stdout.flush()
    }
}

fn format_duration(duration: Duration) -> String {
    format!("{:.3} ms", duration.as_secs_f64() * 1000.0)
}

fn cell_glyph(cell: &Cell) -> char {
    if cell.is_start {
        'S'
    } else if cell.is_end {
        'E'
    } else if cell.is_solution {
        '*'
    } else if cell.visited {
        '.'
    } else {
        ' '
    }
}

/// Plain text picture of the maze, three characters per cell.
pub fn draw_maze(maze: &Maze) -> String {
    let grid = maze.grid();
    let mut out = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            out.push('+');
            out.push_str(if grid.has_wall((row, col), Direction::Top) {
                "---"
            } else {
                "   "
            });
        }
        out.push_str("+\n");
        for col in 0..grid.cols() {
            let cell = &grid[(row, col)];
            out.push(if cell.has_wall(Direction::Left) { '|' } else { ' ' });
            out.push(' ');
            out.push(cell_glyph(cell));
            out.push(' ');
        }
        let last = (row, grid.cols() - 1);
        out.push(if grid.has_wall(last, Direction::Right) { '|' } else { ' ' });
        out.push('\n');
    }
    let bottom = grid.rows() - 1;
    for col in 0..grid.cols() {
        out.push('+');
        out.push_str(if grid.has_wall((bottom, col), Direction::Bottom) {
            "---"
        } else {
            "   "
        });
    }
    out.push_str("+\n");
    out
}
