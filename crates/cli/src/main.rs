//! blockcut CLI

use blockcut_cli::{demo_job, print_summary, Job};
use blockcut_core::{Config, OrientationPolicy, PackingReport, Solver};
use blockcut_d3::Optimizer;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blockcut")]
#[command(about = "Greedy 3D cutting optimizer for foam blocks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in sample job (200 x 118 x 180 block, 13 pieces)
    Demo {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Run a job from a JSON file
    Run {
        /// Path to the JSON job file
        file: PathBuf,

        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Sample orientations at random instead of trying all six in order
    #[arg(long)]
    random: bool,

    /// Seed for random orientations (implies --random)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of parallel random runs; the best one is kept (implies --random)
    #[arg(long)]
    restarts: Option<usize>,

    /// Override the block's height limit
    #[arg(long)]
    height_limit: Option<f64>,

    /// Time limit in seconds (0 = unlimited)
    #[arg(short, long, default_value = "0")]
    time_limit: u64,

    /// Output file for the report (JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RunArgs {
    fn config(&self) -> Config {
        let orientation = if self.random || self.seed.is_some() {
            OrientationPolicy::Random { seed: self.seed }
        } else {
            OrientationPolicy::Exhaustive
        };
        Config::new()
            .with_orientation(orientation)
            .with_time_limit(self.time_limit.saturating_mul(1000))
    }
}

/// Consecutive seeds starting at `first`, wrapping at `u64::MAX`.
fn restart_seeds(first: u64, restarts: usize) -> Vec<u64> {
    (0..restarts.max(1) as u64)
        .map(|i| first.wrapping_add(i))
        .collect()
}

fn execute(job: Job, args: &RunArgs) -> anyhow::Result<PackingReport> {
    let job = match args.height_limit {
        Some(limit) => job.with_height_limit(limit),
        None => job,
    };
    let block = job.block();
    let pieces = job.pieces()?;

    println!(
        "Block: {} x {} x {} (height limit {})",
        block.width(),
        block.height(),
        block.depth(),
        block.height_limit()
    );
    println!("Pieces to place: {}\n", pieces.len());

    let optimizer = Optimizer::new(args.config());
    let report = match args.restarts {
        Some(restarts) => {
            let seeds = restart_seeds(args.seed.unwrap_or(0), restarts);
            optimizer.solve_seeds(&pieces, &block, &seeds)?
        }
        None => optimizer.solve(&pieces, &block)?,
    };
    Ok(report)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (job, args) = match cli.command {
        Commands::Demo { run } => (demo_job(), run),
        Commands::Run { file, run } => {
            log::info!("loading job from {}", file.display());
            (Job::load(&file)?, run)
        }
    };

    let report = execute(job, &args)?;
    print_summary(&report);

    if let Some(path) = args.output {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json)?;
        println!("\nReport saved to: {}", path.display());
    }

    Ok(())
}
