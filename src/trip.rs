//! Trip partitioning and costing.
//!
//! A trip is a contiguous run of deliveries whose weights fit the capacity,
//! driven depot -> first -> ... -> last -> depot. Trips are never stored by
//! the solvers; they are recovered from an ordering whenever it is costed.

use crate::haversine::Haversine;
use crate::traits::{Delivery, DistanceMetric};

/// Default depot location (lat, lng).
pub const DEFAULT_DEPOT: (f64, f64) = (68.073611, 29.315278);

/// Default per-trip capacity in grams.
pub const DEFAULT_CAPACITY: u64 = 10_000_000;

/// Depot, capacity and distance model shared by both solvers.
#[derive(Debug, Clone)]
pub struct DeliveryProblem<M = Haversine> {
    pub depot: (f64, f64),
    pub capacity: u64,
    pub metric: M,
}

impl Default for DeliveryProblem<Haversine> {
    fn default() -> Self {
        Self {
            depot: DEFAULT_DEPOT,
            capacity: DEFAULT_CAPACITY,
            metric: Haversine::default(),
        }
    }
}

impl DeliveryProblem<Haversine> {
    /// Default depot and haversine metric with a custom capacity.
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }
}

/// A contiguous run of deliveries carried in one depot round trip.
#[derive(Debug)]
pub struct Trip<'a, D> {
    pub stops: &'a [D],
    pub weight: u64,
}

impl<D> Clone for Trip<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Trip<'_, D> {}

impl<'a, D: Delivery> Trip<'a, D> {
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn ids(&self) -> Vec<D::Id> {
        self.stops.iter().map(|stop| stop.id().clone()).collect()
    }
}

impl<M: DistanceMetric> DeliveryProblem<M> {
    pub fn new(depot: (f64, f64), capacity: u64, metric: M) -> Self {
        Self {
            depot,
            capacity,
            metric,
        }
    }

    /// Whether `weight` can join a trip already carrying `load`.
    ///
    /// The capacity is inclusive: a trip may land exactly on it.
    pub fn fits(&self, load: u64, weight: u64) -> bool {
        load.saturating_add(weight) <= self.capacity
    }

    /// Distance of depot -> stops... -> depot. An empty trip costs nothing.
    pub fn route_distance<I>(&self, stops: I) -> f64
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut distance = 0.0;
        let mut previous = self.depot;
        let mut visited = false;

        for stop in stops {
            distance += self.metric.distance(previous, stop);
            previous = stop;
            visited = true;
        }

        if visited {
            distance += self.metric.distance(previous, self.depot);
        }

        distance
    }

    /// Distance of a single trip.
    pub fn trip_distance<D: Delivery>(&self, stops: &[D]) -> f64 {
        self.route_distance(stops.iter().map(Delivery::location))
    }

    /// Total distance of `records` split sequentially into capacity-bounded trips.
    pub fn trip_cost<D: Delivery>(&self, records: &[D]) -> f64 {
        let mut total = 0.0;
        self.for_each_trip(records, |trip| total += self.trip_distance(trip.stops));
        total
    }

    /// The trips `trip_cost` charges for, in order.
    pub fn partition<'a, D: Delivery>(&self, records: &'a [D]) -> Vec<Trip<'a, D>> {
        let mut trips = Vec::new();
        self.for_each_trip(records, |trip| trips.push(trip));
        trips
    }

    /// Walk `records` once, handing every maximal fitting run to `visit`.
    ///
    /// A delivery always joins an empty trip, so an overweight delivery is
    /// carried alone rather than stalling the walk.
    fn for_each_trip<'a, D, F>(&self, records: &'a [D], mut visit: F)
    where
        D: Delivery,
        F: FnMut(Trip<'a, D>),
    {
        let mut start = 0;
        let mut load = 0u64;

        for (index, record) in records.iter().enumerate() {
            let weight = record.weight();
            if index > start && !self.fits(load, weight) {
                visit(Trip {
                    stops: &records[start..index],
                    weight: load,
                });
                start = index;
                load = 0;
            }
            load = load.saturating_add(weight);
        }

        // The trailing trip is always flushed.
        if start < records.len() {
            visit(Trip {
                stops: &records[start..],
                weight: load,
            });
        }
    }
}
