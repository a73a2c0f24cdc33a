//! Simulated annealing over delivery orderings.
//!
//! The search state is a permutation of the deliveries, costed by
//! sequential trip partitioning. Neighbors swap two positions; worsening
//! moves are accepted with the Metropolis probability `exp(-delta / T)`
//! and the temperature decays geometrically until it reaches the stop
//! temperature.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::traits::{Delivery, DistanceMetric};
use crate::trip::DeliveryProblem;

/// Annealing schedule parameters.
///
/// # Examples
///
/// ```
/// use gift_planner::anneal::AnnealOptions;
///
/// let options = AnnealOptions::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.01)
///     .with_max_iterations(10_000);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealOptions {
    /// Starting temperature. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// Fraction of the temperature removed after every iteration, in (0, 1).
    pub cooling_rate: f64,

    /// The search stops once the temperature is at or below this value.
    pub min_temperature: f64,

    /// Hard cap on iterations. `None` runs until the schedule is exhausted.
    pub max_iterations: Option<usize>,
}

impl Default for AnnealOptions {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.003,
            min_temperature: 1.0,
            max_iterations: None,
        }
    }
}

impl AnnealOptions {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Rejects schedules that would never terminate or make no sense.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(PlannerError::InvalidConfig(format!(
                "initial temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(PlannerError::InvalidConfig(format!(
                "cooling rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return Err(PlannerError::InvalidConfig(format!(
                "stop temperature must be positive and finite, got {}",
                self.min_temperature
            )));
        }
        Ok(())
    }

    /// Number of iterations the schedule allows before the iteration cap.
    pub fn schedule_len(&self) -> usize {
        let mut temperature = self.initial_temperature;
        let mut steps = 0;
        while temperature > self.min_temperature {
            temperature *= 1.0 - self.cooling_rate;
            steps += 1;
        }
        steps
    }
}

/// Outcome of one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<D> {
    /// Lowest-cost ordering seen.
    pub best_order: Vec<D>,

    /// Cost of `best_order`.
    pub best_distance: f64,

    /// Neighbor evaluations performed.
    pub iterations: usize,

    /// Accepted moves, including improvements.
    pub accepted_moves: usize,

    /// Strictly improving moves.
    pub improving_moves: usize,

    /// Accepted moves that made the current ordering strictly worse.
    pub worsening_moves: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,

    /// Best cost after every iteration. The first entry is the cost of
    /// the initial shuffle, which counts as a candidate for the best.
    pub best_history: Vec<f64>,
}

/// Runs the annealing search with a validated schedule.
#[derive(Debug, Clone)]
pub struct Annealer {
    options: AnnealOptions,
}

impl Annealer {
    pub fn new(options: AnnealOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Search for a low-cost ordering of `records`.
    ///
    /// Randomness comes only from `rng`: the initial shuffle, the swap
    /// positions and the acceptance draws.
    #[tracing::instrument(skip_all, fields(records = records.len(), capacity = problem.capacity))]
    pub fn run<D, M, R>(&self, problem: &DeliveryProblem<M>, records: &[D], rng: &mut R) -> AnnealResult<D>
    where
        D: Delivery + Clone,
        M: DistanceMetric,
        R: Rng,
    {
        let options = &self.options;
        let mut temperature = options.initial_temperature;

        if records.is_empty() {
            return AnnealResult {
                best_order: Vec::new(),
                best_distance: 0.0,
                iterations: 0,
                accepted_moves: 0,
                improving_moves: 0,
                worsening_moves: 0,
                final_temperature: temperature,
                best_history: vec![0.0],
            };
        }

        let mut order = records.to_vec();
        order.shuffle(rng);
        let mut search = Search::new(problem, order);

        let mut best_order = search.order.clone();
        let mut best_distance = search.cost;
        let mut best_history = vec![best_distance];

        let mut iterations = 0usize;
        let mut improving_moves = 0usize;
        let mut worsening_moves = 0usize;
        let n = search.order.len();

        while temperature > options.min_temperature {
            if options.max_iterations.is_some_and(|max| iterations >= max) {
                break;
            }

            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            match search.try_swap(i, j, temperature, rng) {
                Move::Improving => improving_moves += 1,
                Move::Worsening => worsening_moves += 1,
                Move::Sideways | Move::Rejected => {}
            }

            if search.cost < best_distance {
                best_distance = search.cost;
                best_order.clone_from(&search.order);
            }
            best_history.push(best_distance);

            iterations += 1;
            temperature *= 1.0 - options.cooling_rate;
        }
        let accepted_moves = iterations - search.rejected;

        debug!(
            iterations,
            accepted_moves,
            improving_moves,
            worsening_moves,
            best_distance,
            final_temperature = temperature,
            "annealing complete"
        );

        AnnealResult {
            best_order,
            best_distance,
            iterations,
            accepted_moves,
            improving_moves,
            worsening_moves,
            final_temperature: temperature,
            best_history,
        }
    }
}

/// Outcome of one proposed swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Improving,
    Sideways,
    Worsening,
    Rejected,
}

/// Current ordering with its cached cost.
struct Search<'p, D, M> {
    problem: &'p DeliveryProblem<M>,
    order: Vec<D>,
    cost: f64,
    rejected: usize,
}

impl<'p, D: Delivery, M: DistanceMetric> Search<'p, D, M> {
    fn new(problem: &'p DeliveryProblem<M>, order: Vec<D>) -> Self {
        let cost = problem.trip_cost(&order);
        Self {
            problem,
            order,
            cost,
            rejected: 0,
        }
    }

    /// Swap positions `i` and `j`, keeping the swap only if it passes the
    /// Metropolis criterion at `temperature`. A rejected swap is undone and
    /// leaves `cost` untouched.
    fn try_swap<R: Rng>(&mut self, i: usize, j: usize, temperature: f64, rng: &mut R) -> Move {
        self.order.swap(i, j);
        let candidate = self.problem.trip_cost(&self.order);

        if candidate < self.cost {
            self.cost = candidate;
            return Move::Improving;
        }

        let probability = ((self.cost - candidate) / temperature).exp();
        if rng.random::<f64>() < probability {
            let outcome = if candidate > self.cost {
                Move::Worsening
            } else {
                Move::Sideways
            };
            self.cost = candidate;
            outcome
        } else {
            self.order.swap(i, j);
            self.rejected += 1;
            Move::Rejected
        }
    }
}
