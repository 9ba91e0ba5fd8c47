//! Command-line front end: reads whitespace-separated integers from stdin (or
//! `--input FILE`), solves one instance and prints the contest-style answer.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bounded_dp::parse::{
    format_hop_path, format_outcome, format_tour, format_tour_order, parse_points_input,
    parse_sequence_input, parse_step_input, parse_subset_input,
};
use bounded_dp::problems::{
    hop_path::hop_path_with,
    min_subset::solve_min_with,
    runs::{longest_run_with, Direction},
    step_count::{count_windowed_with, count_with, Arithmetic},
    subset_sum::solve_with,
    tsp::shortest_tour_with,
};
use bounded_dp::{Limits, SolveConfig};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dpkit")]
#[command(about = "Bounded-state dynamic programs with answer reconstruction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Debug, Args)]
struct CommonArgs {
    /// Read input from a file instead of stdin
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,

    /// Largest accepted target / staircase height
    #[arg(long, global = true)]
    max_target: Option<usize>,

    /// Largest accepted number of weights
    #[arg(long, global = true)]
    max_items: Option<usize>,

    /// Largest accepted number of cities for `tsp`
    #[arg(long, global = true)]
    max_cities: Option<usize>,

    /// Layers per engine block (default: about sqrt of the layer count)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    block_size: Option<u64>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Subset-sum: `N S` then N weights; prints -1 or the selection
    Subset {
        /// Return a selection with the fewest items
        #[arg(long)]
        min: bool,
    },

    /// Step counting: a total then the allowed step sizes
    Stairs {
        /// Use the constant-memory ring instead of the full table
        #[arg(long)]
        window: bool,

        /// Report counts modulo M
        #[arg(long, value_name = "M")]
        modulo: Option<u64>,
    },

    /// Minimum-cost hop path: `N` then N heights; prints the platform count and the platforms
    Hop {
        /// Print the total cost on a line before the path
        #[arg(long)]
        cost: bool,
    },

    /// Longest monotone run: `N` then N values
    Run {
        /// Look for non-increasing runs instead
        #[arg(long)]
        non_increasing: bool,
    },

    /// Shortest closed tour: `N` then N `x y` points; prints the length
    Tsp {
        /// Also print the visiting order
        #[arg(long)]
        tour: bool,
    },
}

impl CommonArgs {
    fn init_logging(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }

    fn config(&self) -> SolveConfig {
        let mut limits = Limits::default();
        if let Some(t) = self.max_target {
            limits = limits.with_max_target(t);
        }
        if let Some(n) = self.max_items {
            limits = limits.with_max_items(n);
        }
        if let Some(n) = self.max_cities {
            limits = limits.with_max_cities(n);
        }
        let config = SolveConfig::default().with_limits(limits);
        match self.block_size {
            Some(b) => config.with_block_size(usize::try_from(b).unwrap_or(usize::MAX)),
            None => config,
        }
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => {
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
            }
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

fn run(cmd: &Commands, text: &str, config: &SolveConfig) -> Result<String> {
    let answer = match cmd {
        Commands::Subset { min } => {
            let (weights, target) = parse_subset_input(text)?;
            log::info!("subset-sum: {} weights, target {target}", weights.len());
            let outcome = if *min {
                solve_min_with(&weights, target, config)?
            } else {
                solve_with(&weights, target, config)?
            };
            log::debug!("outcome: {outcome:?}");
            format_outcome(&outcome)
        }
        Commands::Stairs { window, modulo } => {
            let (target, steps) = parse_step_input(text)?;
            let arithmetic = modulo.map_or(Arithmetic::Exact, Arithmetic::Modulo);
            log::info!("step count: total {target}, steps {steps:?}, {arithmetic:?}");
            let ways = if *window {
                count_windowed_with(target, &steps, arithmetic, config)?
            } else {
                count_with(target, &steps, arithmetic, config)?
            };
            ways.to_string()
        }
        Commands::Hop { cost } => {
            let heights = parse_sequence_input(text)?;
            let path = hop_path_with(&heights, config)?;
            log::info!("hop path cost {}", path.cost);
            if *cost {
                format!("{}\n{}", path.cost, format_hop_path(&path))
            } else {
                format_hop_path(&path)
            }
        }
        Commands::Run { non_increasing } => {
            let values = parse_sequence_input(text)?;
            let direction = if *non_increasing {
                Direction::NonIncreasing
            } else {
                Direction::NonDecreasing
            };
            let found = longest_run_with(&values, direction, config)?;
            log::debug!("longest run starts at {}", found.start);
            found.len.to_string()
        }
        Commands::Tsp { tour } => {
            let points = parse_points_input(text)?;
            log::info!("tour over {} cities", points.len());
            let best = shortest_tour_with(&points, config)?;
            if *tour {
                format!("{}\n{}", format_tour(&best), format_tour_order(&best))
            } else {
                format_tour(&best)
            }
        }
    };
    Ok(answer)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.common.init_logging();

    let text = cli.common.read_input()?;
    let config = cli.common.config();
    let answer = run(&cli.cmd, &text, &config).context("solve failed")?;
    println!("{answer}");
    Ok(())
}
