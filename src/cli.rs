//! CLI argument parsing for the gift-planner binary.

use std::path::PathBuf;

use clap::Parser;

use gift_planner::config::{DEFAULT_GIFTS_FILE, PlannerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "gift-planner",
    about = "Plan capacity-bounded depot round trips for gift deliveries"
)]
pub struct Cli {
    /// Gift list, one `childId;latitude;longitude;weightGrams` per line
    #[arg(env = "GIFT_PLANNER_FILE", default_value = DEFAULT_GIFTS_FILE)]
    pub file: PathBuf,

    /// Per-trip capacity in grams
    #[arg(long, env = "GIFT_PLANNER_CAPACITY")]
    pub capacity: Option<u64>,

    /// Depot latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub depot_lat: Option<f64>,

    /// Depot longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub depot_lng: Option<f64>,

    /// Starting annealing temperature
    #[arg(long)]
    pub initial_temperature: Option<f64>,

    /// Fraction of the temperature removed per iteration
    #[arg(long)]
    pub cooling_rate: Option<f64>,

    /// Temperature at which annealing stops
    #[arg(long)]
    pub min_temperature: Option<f64>,

    /// Hard cap on annealing iterations
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Independent annealing runs; the best is reported
    #[arg(long, default_value_t = 1)]
    pub restarts: usize,

    /// Seed for the random generator (random when omitted)
    #[arg(long, env = "GIFT_PLANNER_SEED")]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Defaults overridden by whatever was given on the command line.
    pub fn config(&self) -> PlannerConfig {
        let mut config = PlannerConfig::default()
            .with_gifts_file(&self.file)
            .with_restarts(self.restarts);

        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(lat) = self.depot_lat {
            config.depot.0 = lat;
        }
        if let Some(lng) = self.depot_lng {
            config.depot.1 = lng;
        }
        if let Some(t) = self.initial_temperature {
            config.anneal.initial_temperature = t;
        }
        if let Some(rate) = self.cooling_rate {
            config.anneal.cooling_rate = rate;
        }
        if let Some(t) = self.min_temperature {
            config.anneal.min_temperature = t;
        }
        config.anneal.max_iterations = self.max_iterations;
        config.seed = self.seed;
        config
    }
}
