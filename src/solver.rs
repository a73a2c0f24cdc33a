//! Solver entry points.
//!
//! `greedy_solve` and `anneal_solve` cost deliveries against the default
//! depot with the haversine metric. `plan` runs both solvers for a full
//! configuration, with annealing restarts spread over the rayon pool.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::anneal::{AnnealOptions, AnnealResult, Annealer};
use crate::config::PlannerConfig;
use crate::error::Result;
use crate::greedy::{self, GreedyResult};
use crate::traits::{Delivery, DistanceMetric};
use crate::trip::DeliveryProblem;

/// Total distance of the greedy two-sided packing.
pub fn greedy_solve<D: Delivery>(records: &[D], capacity: u64) -> f64 {
    greedy::pack(&DeliveryProblem::with_capacity(capacity), records).total_distance
}

/// Best total distance found by one annealing run.
///
/// Fails only when the cooling parameters could never terminate.
pub fn anneal_solve<D, R>(
    records: &[D],
    capacity: u64,
    initial_temperature: f64,
    cooling_rate: f64,
    rng: &mut R,
) -> Result<f64>
where
    D: Delivery + Clone,
    R: Rng,
{
    let options = AnnealOptions::default()
        .with_initial_temperature(initial_temperature)
        .with_cooling_rate(cooling_rate);
    let annealer = Annealer::new(options)?;
    Ok(annealer
        .run(&DeliveryProblem::with_capacity(capacity), records, rng)
        .best_distance)
}

/// Run `restarts` independent annealing searches and keep the best.
///
/// Each restart gets its own generator seeded from `rng`, so the outcome
/// depends only on `rng`'s state, not on thread scheduling.
pub fn anneal_restarts<D, M, R>(
    problem: &DeliveryProblem<M>,
    records: &[D],
    annealer: &Annealer,
    restarts: usize,
    rng: &mut R,
) -> AnnealResult<D>
where
    D: Delivery + Clone + Send + Sync,
    M: DistanceMetric + Sync,
    R: Rng,
{
    let seeds: Vec<u64> = (0..restarts.max(1)).map(|_| rng.random()).collect();

    let mut results: Vec<AnnealResult<D>> = seeds
        .into_par_iter()
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            annealer.run(problem, records, &mut rng)
        })
        .collect();

    let best = results
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.best_distance.total_cmp(&b.best_distance))
        .map(|(index, _)| index)
        .unwrap_or(0);

    debug!(
        restarts = results.len(),
        best_distance = results[best].best_distance,
        "annealing restarts complete"
    );
    results.swap_remove(best)
}

/// Both solvers' results for one set of deliveries.
#[derive(Debug)]
pub struct Plan<D: Delivery> {
    pub greedy: GreedyResult<D::Id>,
    pub annealing: AnnealResult<D>,
}

/// Run the greedy packer and the annealing restarts side by side.
pub fn plan<D, R>(config: &PlannerConfig, records: &[D], rng: &mut R) -> Result<Plan<D>>
where
    D: Delivery + Clone + Send + Sync,
    D::Id: Send,
    R: Rng + Send,
{
    config.validate()?;
    let problem = config.problem();
    let annealer = config.annealer()?;

    let (greedy, annealing) = rayon::join(
        || greedy::pack(&problem, records),
        || anneal_restarts(&problem, records, &annealer, config.restarts, rng),
    );

    Ok(Plan { greedy, annealing })
}
