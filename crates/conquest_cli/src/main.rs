//! Conquest - console runner
//!
//! # Usage
//!
//! ```bash
//! # Built-in frontier scenario, unseeded dice
//! cargo run -p conquest_cli
//!
//! # Custom scenario with reproducible dice
//! cargo run -p conquest_cli -- --scenario crates/conquest_cli/scenarios/frontier.ron --seed 7
//! ```
//!
//! Report lines go to stdout, logs to stderr.

use std::path::PathBuf;

use clap::Parser;
use conquest_cli::{run_scenario, RunError, Scenario};
use conquest_core::dice::RngDice;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "conquest")]
#[command(about = "Resolve one attack on a territorial-conquest board")]
#[command(version)]
struct Cli {
    /// Scenario file to load (defaults to the built-in frontier board)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Seed for reproducible dice
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(&cli) {
        tracing::error!("Run failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = match cli.seed {
        Some(seed) => run_scenario(&scenario, &mut RngDice::seeded(seed), &mut out)?,
        None => run_scenario(&scenario, &mut RngDice::new(rand::rng()), &mut out)?,
    };

    tracing::debug!("Finished '{}': {:?}", report.scenario, report.attack);
    Ok(())
}
