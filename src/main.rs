use anyhow::Context;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use waste_sim::simulation::{self, SimConfig};

#[derive(Parser)]
#[command(name = "waste_sim")]
#[command(about = "Greedy single-vehicle waste-collection dispatch simulation")]
struct Cli {
    /// Number of collection zones (the depot is zone 0 and always present)
    #[arg(long, default_value = "6", value_parser = clap::value_parser!(u32).range(1..))]
    zones: u32,

    /// Number of waste bins to generate
    #[arg(long, default_value = "12")]
    bins: u32,

    /// Seed for reproducible scenario generation
    #[arg(long)]
    seed: Option<u64>,

    /// Vehicle volume capacity
    #[arg(long, default_value = "10")]
    max_volume: u32,

    /// Vehicle bin-count capacity
    #[arg(long, default_value = "5")]
    max_bins: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let scenario = simulation::generate(cli.zones, cli.bins, &mut rng)
        .context("Failed to generate scenario")?;

    let config = SimConfig {
        max_volume: cli.max_volume,
        max_bins: cli.max_bins,
        ..SimConfig::default()
    };

    info!(
        "dispatching {} bins across {} zones (volume cap {}, bin cap {})",
        cli.bins, cli.zones, cli.max_volume, cli.max_bins
    );

    let summary = simulation::run(scenario.bins, scenario.graph, config)
        .context("Dispatch run failed")?;

    println!("{}", summary.report());

    Ok(())
}
