//! Greedy two-sided capacity packer.
//!
//! Deliveries are sorted by weight and trips are filled by alternately
//! taking the lightest and the heaviest remaining delivery. Pairing light
//! with heavy tends to land trips closer to capacity than filling from one
//! end, which means fewer depot round trips.

use tracing::{debug, trace, warn};

use crate::traits::{Delivery, DistanceMetric};
use crate::trip::DeliveryProblem;

/// One packed trip, in visiting order.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan<Id> {
    pub ids: Vec<Id>,
    pub weight: u64,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GreedyResult<Id> {
    pub trips: Vec<TripPlan<Id>>,
    pub total_distance: f64,
}

/// Pack `records` into trips with the lightest/heaviest heuristic.
///
/// The input order does not matter: records are sorted by weight, with
/// ties broken by id.
#[tracing::instrument(skip_all, fields(records = records.len(), capacity = problem.capacity))]
pub fn pack<D, M>(problem: &DeliveryProblem<M>, records: &[D]) -> GreedyResult<D::Id>
where
    D: Delivery,
    M: DistanceMetric,
{
    let mut sorted: Vec<&D> = records.iter().collect();
    sorted.sort_by(|a, b| a.weight().cmp(&b.weight()).then_with(|| a.id().cmp(b.id())));

    let mut packer = TripAccumulator::new(problem);

    // `hi` is exclusive, so the unconsumed records are sorted[lo..hi].
    let mut lo = 0;
    let mut hi = sorted.len();

    while lo < hi {
        let mut taken = false;

        if packer.fits(sorted[lo]) {
            packer.push(sorted[lo]);
            lo += 1;
            taken = true;
        }

        if lo < hi && packer.fits(sorted[hi - 1]) {
            packer.push(sorted[hi - 1]);
            hi -= 1;
            taken = true;
        }

        if !taken {
            if packer.is_empty() {
                // Even the lightest remaining record exceeds capacity on its own.
                warn!(
                    weight = sorted[lo].weight(),
                    capacity = problem.capacity,
                    "record heavier than trip capacity, carrying it alone"
                );
                packer.push(sorted[lo]);
                lo += 1;
            }
            packer.flush();
        }
    }

    packer.flush();

    let result = packer.finish();
    debug!(
        trips = result.trips.len(),
        total_distance = result.total_distance,
        "greedy packing complete"
    );
    result
}

/// Collects the current trip and the finished ones.
struct TripAccumulator<'a, 'p, D: Delivery, M> {
    problem: &'p DeliveryProblem<M>,
    current: Vec<&'a D>,
    load: u64,
    trips: Vec<TripPlan<D::Id>>,
    total_distance: f64,
}

impl<'a, 'p, D, M> TripAccumulator<'a, 'p, D, M>
where
    D: Delivery,
    M: DistanceMetric,
{
    fn new(problem: &'p DeliveryProblem<M>) -> Self {
        Self {
            problem,
            current: Vec::new(),
            load: 0,
            trips: Vec::new(),
            total_distance: 0.0,
        }
    }

    fn fits(&self, record: &D) -> bool {
        self.problem.fits(self.load, record.weight())
    }

    fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    fn push(&mut self, record: &'a D) {
        self.load = self.load.saturating_add(record.weight());
        self.current.push(record);
    }

    /// Close the current trip. Empty trips are dropped.
    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }

        let distance = self
            .problem
            .route_distance(self.current.iter().map(|record| record.location()));
        trace!(
            trip = self.trips.len(),
            stops = self.current.len(),
            weight = self.load,
            distance,
            "trip closed"
        );

        self.total_distance += distance;
        self.trips.push(TripPlan {
            ids: self.current.drain(..).map(|record| record.id().clone()).collect(),
            weight: self.load,
            distance,
        });
        self.load = 0;
    }

    fn finish(self) -> GreedyResult<D::Id> {
        GreedyResult {
            trips: self.trips,
            total_distance: self.total_distance,
        }
    }
}
