//! gift-planner core
//!
//! Capacity-bounded depot round trips for geocoded deliveries, solved by a
//! greedy two-sided packer or by simulated annealing.

pub mod traits;
pub mod error;
pub mod config;
pub mod gift;
pub mod haversine;
pub mod trip;
pub mod greedy;
pub mod anneal;
pub mod solver;
pub mod ingest;
pub mod report;
