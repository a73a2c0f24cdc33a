//! Test fixtures for gift-planner.
//!
//! Provides realistic test data including:
//! - Northern Finland / Lapland town locations around the depot
//! - Gift builders that spread weights over those locations

pub mod lapland_locations;

pub use lapland_locations::*;
