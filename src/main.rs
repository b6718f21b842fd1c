use std::path::PathBuf;

use clap::Parser;
use mazestep::{
    Generator, SolverKind,
    app::{App, AppConfig},
};

/// Generate a maze and watch pathfinding algorithms solve it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of maze rows
    #[arg(long, default_value_t = 15)]
    rows: u16,

    /// Number of maze columns
    #[arg(long, default_value_t = 15)]
    cols: u16,

    /// Generation algorithm: recursive_backtracking or prims_algorithm
    #[arg(long, default_value = "recursive_backtracking")]
    generator: Generator,

    /// Comma separated solving algorithms. Two to four run as a comparison.
    /// Known: wall_follower, dijkstra, dead_end_filling, bfs, dfs, ids, a_star
    #[arg(long, value_delimiter = ',', default_value = "bfs")]
    solvers: Vec<SolverKind>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the solved maze
    #[arg(long)]
    show: bool,

    /// Directory to write mazestep.log into
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,

    /// Log debug events
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        AppConfig {
            rows: args.rows,
            cols: args.cols,
            generator: args.generator,
            solvers: args.solvers,
            seed: args.seed,
            show_maze: args.show,
            log_dir: args.log_dir,
            verbose: args.verbose,
        }
    }
}

fn main() -> std::io::Result<()> {
    let app = App::new(Args::parse().into());
    let _guard = app.init_logging()?;
    app.run()
}
