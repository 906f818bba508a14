mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use er_study_shared::config::{Configuration, DEFAULT_NUM_RUNS, DEFAULT_SEED};

#[derive(Parser)]
#[command(name = "er-study", version, about = "Monte Carlo study of Erdős–Rényi graph statistics")]
struct Cli {
    /// Log every trial
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the study and plot pooled degree distributions
    Run {
        /// Trials per configuration
        #[arg(long, default_value_t = DEFAULT_NUM_RUNS)]
        runs: u32,
        /// Seed for the study's random generator
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Configuration as N:P; repeat for several (default 100:0.1 500:0.02 1000:0.01)
        #[arg(long = "config", value_name = "N:P")]
        configs: Vec<Configuration>,
        /// Chart output path (.svg)
        #[arg(long, default_value = "degree_distribution.svg")]
        output: PathBuf,
        /// Skip rendering the chart
        #[arg(long)]
        no_plot: bool,
        /// Number of parallel workers for path-length traversal (0 = auto)
        #[arg(long, default_value = "0")]
        workers: usize,
    },
    /// Sample and measure a single graph
    Trial {
        /// Node count
        #[arg(long, default_value = "100")]
        nodes: usize,
        /// Edge probability
        #[arg(long, default_value = "0.1")]
        probability: f64,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match cli.command {
        Commands::Run {
            runs,
            seed,
            configs,
            output,
            no_plot,
            workers,
        } => commands::run::run(
            configs,
            runs,
            seed,
            (!no_plot).then_some(output.as_path()),
            workers,
        ),
        Commands::Trial {
            nodes,
            probability,
            seed,
        } => commands::trial::run(nodes, probability, seed),
    }
}
