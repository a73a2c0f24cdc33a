//! Planner configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::anneal::{AnnealOptions, Annealer};
use crate::error::{PlannerError, Result};
use crate::haversine::{EARTH_RADIUS_KM, Haversine};
use crate::trip::{DEFAULT_CAPACITY, DEFAULT_DEPOT, DeliveryProblem};

/// Gift list read when no path is given.
pub const DEFAULT_GIFTS_FILE: &str = "gifts.txt";

/// Every tunable of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Semicolon-separated gift list.
    pub gifts_file: PathBuf,

    /// Per-trip capacity in grams.
    pub capacity: u64,

    /// Depot (lat, lng) in degrees.
    pub depot: (f64, f64),

    /// Sphere radius for the haversine metric.
    pub earth_radius_km: f64,

    pub anneal: AnnealOptions,

    /// Independent annealing runs; the best one is reported.
    pub restarts: usize,

    /// Seed for the process RNG. Drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            gifts_file: PathBuf::from(DEFAULT_GIFTS_FILE),
            capacity: DEFAULT_CAPACITY,
            depot: DEFAULT_DEPOT,
            earth_radius_km: EARTH_RADIUS_KM,
            anneal: AnnealOptions::default(),
            restarts: 1,
            seed: None,
        }
    }
}

impl PlannerConfig {
    pub fn with_gifts_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.gifts_file = path.into();
        self
    }

    pub fn with_capacity(mut self, capacity: u64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_depot(mut self, lat: f64, lng: f64) -> Self {
        self.depot = (lat, lng);
        self
    }

    pub fn with_anneal(mut self, anneal: AnnealOptions) -> Self {
        self.anneal = anneal;
        self
    }

    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(PlannerError::InvalidConfig("capacity must be positive".into()));
        }
        let (lat, lng) = self.depot;
        if !valid_coordinate(lat, lng) {
            return Err(PlannerError::InvalidConfig(format!(
                "depot ({lat}, {lng}) is not a valid coordinate"
            )));
        }
        if !self.earth_radius_km.is_finite() || self.earth_radius_km <= 0.0 {
            return Err(PlannerError::InvalidConfig(format!(
                "earth radius must be positive, got {}",
                self.earth_radius_km
            )));
        }
        if self.restarts == 0 {
            return Err(PlannerError::InvalidConfig("at least one restart is required".into()));
        }
        self.anneal.validate()
    }

    pub fn problem(&self) -> DeliveryProblem<Haversine> {
        DeliveryProblem::new(self.depot, self.capacity, Haversine::new(self.earth_radius_km))
    }

    pub fn annealer(&self) -> Result<Annealer> {
        Annealer::new(self.anneal.clone())
    }
}

/// Latitude within [-90, 90] and longitude within [-180, 180].
pub fn valid_coordinate(lat: f64, lng: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}
