//! Core domain traits for the delivery planner.
//!
//! These are intentionally minimal. The solvers only need an identifier,
//! a location and a weight per delivery, plus a way to measure distance.

use std::hash::Hash;

/// Unique identifier for planner entities.
///
/// `Ord` is required so solvers can break weight ties deterministically.
pub trait Id: Clone + Eq + Hash + Ord {}

impl<T> Id for T where T: Clone + Eq + Hash + Ord {}

/// A single delivery to be carried from the depot.
pub trait Delivery {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Location coordinates (lat, lng) in degrees.
    fn location(&self) -> (f64, f64);

    /// Weight in the same unit as the trip capacity (grams by default).
    fn weight(&self) -> u64;
}

/// Measures the distance between two (lat, lng) points.
///
/// Implementations must be symmetric and return zero for identical points.
pub trait DistanceMetric {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}
