//! Run summary for console or JSON output.

use std::fmt;

use serde::Serialize;

use crate::gift::{Gift, total_weight};
use crate::ingest::IngestReport;
use crate::solver::Plan;
use crate::traits::DistanceMetric;
use crate::trip::DeliveryProblem;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreedySummary {
    pub distance_km: f64,
    pub trips: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnealSummary {
    pub distance_km: f64,
    pub trips: usize,
    pub iterations: usize,
    pub accepted_moves: usize,
    pub improving_moves: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub gifts: usize,
    pub discarded_lines: usize,
    pub total_grams: u64,
    pub seed: u64,
    pub greedy: GreedySummary,
    pub annealing: AnnealSummary,
}

impl SolveReport {
    pub fn new<M: DistanceMetric>(
        problem: &DeliveryProblem<M>,
        ingest: &IngestReport,
        seed: u64,
        plan: &Plan<Gift>,
    ) -> Self {
        let annealing = &plan.annealing;
        Self {
            gifts: ingest.gifts.len(),
            discarded_lines: ingest.discarded,
            total_grams: total_weight(&ingest.gifts),
            seed,
            greedy: GreedySummary {
                distance_km: plan.greedy.total_distance,
                trips: plan.greedy.trips.len(),
            },
            annealing: AnnealSummary {
                distance_km: annealing.best_distance,
                trips: problem.partition(&annealing.best_order).len(),
                iterations: annealing.iterations,
                accepted_moves: annealing.accepted_moves,
                improving_moves: annealing.improving_moves,
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Kilometers to whole metres, truncated.
pub fn metres(km: f64) -> i64 {
    (km * 1000.0) as i64
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "total distance via greedy approach: {}",
            metres(self.greedy.distance_km)
        )?;
        writeln!(
            f,
            "total distance via simulated annealing: {}",
            metres(self.annealing.distance_km)
        )
    }
}
