//! Error types for the planner.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("failed to read gift file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read gift records: {0}")]
    Csv(#[from] csv::Error),

    #[error("gift {child_id} weighs {grams} g, above the trip capacity of {capacity} g")]
    Overweight {
        child_id: u32,
        grams: u64,
        capacity: u64,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
