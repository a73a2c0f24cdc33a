//! Haversine great-circle distance.
//!
//! Treats the Earth as a sphere of fixed radius. All coordinates are
//! (lat, lng) pairs in degrees; distances are in kilometers.

use crate::traits::DistanceMetric;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// Haversine distance metric on a sphere of `radius_km`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    pub radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Haversine {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Calculate haversine distance between two points in kilometers.
    pub fn distance_km(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = lat2_rad - lat1_rad;
        let delta_lng = lng2.to_radians() - lng1.to_radians();

        let h = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        // Rounding can push h just outside [0, 1] near antipodes.
        let h = h.clamp(0.0, 1.0);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        self.radius_km * c
    }
}

impl DistanceMetric for Haversine {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        self.distance_km(from, to)
    }
}
