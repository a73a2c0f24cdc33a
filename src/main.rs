//! gift-planner binary: load the gift list, run both solvers, print the distances.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gift_planner::{ingest, report::SolveReport, solver};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();
    let config = cli.config();
    config.validate().context("invalid planner configuration")?;

    let loaded = ingest::load_gifts(&config.gifts_file, config.capacity)
        .with_context(|| format!("failed to load gifts from {}", config.gifts_file.display()))?;

    // One generator per process; restarts derive their seeds from it.
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, gifts = loaded.gifts.len(), "planning deliveries");
    let mut rng = StdRng::seed_from_u64(seed);

    let plan = solver::plan(&config, &loaded.gifts, &mut rng)?;
    let report = SolveReport::new(&config.problem(), &loaded, seed, &plan);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }

    Ok(())
}
