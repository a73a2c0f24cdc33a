//! The concrete delivery record read from the gift list.

use serde::{Deserialize, Serialize};

use crate::traits::Delivery;

/// One gift: who receives it, where, and how heavy it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub child_id: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub grams: u64,
}

impl Gift {
    pub fn new(child_id: u32, latitude: f64, longitude: f64, grams: u64) -> Self {
        Self {
            child_id,
            latitude,
            longitude,
            grams,
        }
    }
}

impl Delivery for Gift {
    type Id = u32;

    fn id(&self) -> &Self::Id {
        &self.child_id
    }

    fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    fn weight(&self) -> u64 {
        self.grams
    }
}

/// Total weight of a slice of deliveries.
pub fn total_weight<D: Delivery>(deliveries: &[D]) -> u64 {
    deliveries.iter().map(Delivery::weight).sum()
}
