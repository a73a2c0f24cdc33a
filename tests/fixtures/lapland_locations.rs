//! Lapland and northern Finland locations for realistic test fixtures.
//!
//! Coordinates are town centres, rounded to four decimals.

#![allow(dead_code)]

use gift_planner::gift::Gift;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Lapland
// ============================================================================

pub const LAPLAND_TOWNS: &[Location] = &[
    Location::new("Rovaniemi", 66.5039, 25.7294),
    Location::new("Sodankylä", 67.4149, 26.5897),
    Location::new("Ivalo", 68.6586, 27.5411),
    Location::new("Inari", 68.9056, 27.0288),
    Location::new("Utsjoki", 69.9081, 27.0269),
    Location::new("Kittilä", 67.6594, 24.9114),
    Location::new("Muonio", 67.9580, 23.6780),
    Location::new("Enontekiö", 68.3847, 23.6389),
    Location::new("Kemijärvi", 66.7131, 27.4306),
    Location::new("Salla", 66.8322, 28.6681),
    Location::new("Savukoski", 67.2928, 28.1631),
    Location::new("Pelkosenniemi", 67.1100, 27.5106),
    Location::new("Kolari", 67.3311, 23.7914),
    Location::new("Pello", 66.7753, 23.9631),
    Location::new("Tornio", 65.8481, 24.1467),
    Location::new("Kemi", 65.7364, 24.5636),
];

// ============================================================================
// Further south
// ============================================================================

pub const SOUTHERN_TOWNS: &[Location] = &[
    Location::new("Oulu", 65.0121, 25.4651),
    Location::new("Kuusamo", 65.9667, 29.1833),
    Location::new("Kajaani", 64.2273, 27.7285),
    Location::new("Kuopio", 62.8924, 27.6770),
    Location::new("Tampere", 61.4978, 23.7610),
    Location::new("Helsinki", 60.1699, 24.9384),
];

/// Returns all locations as a single list.
pub fn all_locations() -> Vec<Location> {
    let mut all = Vec::with_capacity(LAPLAND_TOWNS.len() + SOUTHERN_TOWNS.len());
    all.extend_from_slice(LAPLAND_TOWNS);
    all.extend_from_slice(SOUTHERN_TOWNS);
    all
}

/// One gift per location, with weights cycling through a fixed pattern.
///
/// Ids start at 1 and follow the location order.
pub fn gifts_at(locations: &[Location], weights: &[u64]) -> Vec<Gift> {
    locations
        .iter()
        .enumerate()
        .map(|(i, loc)| Gift::new(i as u32 + 1, loc.lat, loc.lng, weights[i % weights.len()]))
        .collect()
}

/// A mixed delivery list for a 10 tonne sleigh.
pub fn sample_gifts() -> Vec<Gift> {
    gifts_at(
        &all_locations(),
        &[1_200_000, 3_400_000, 800_000, 5_600_000, 2_100_000, 4_700_000, 300_000],
    )
}
