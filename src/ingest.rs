//! Gift list ingestion.
//!
//! The list is line-delimited, one `childId;latitude;longitude;weightGrams`
//! record per line. Fields are taken verbatim: no quoting and no trimming,
//! so a stray quote or padded number spoils only its own line. Malformed
//! lines are discarded; a gift that could never fit in a trip aborts the
//! load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::config::valid_coordinate;
use crate::error::{PlannerError, Result};
use crate::gift::Gift;

/// Gifts accepted from a list, plus how many lines were thrown away.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    pub gifts: Vec<Gift>,
    pub discarded: usize,
}

/// Read and validate the gift list at `path`.
pub fn load_gifts(path: impl AsRef<Path>, capacity: u64) -> Result<IngestReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PlannerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let report = parse_gifts(BufReader::new(file), capacity)?;
    info!(
        path = %path.display(),
        gifts = report.gifts.len(),
        discarded = report.discarded,
        "gift list loaded"
    );
    Ok(report)
}

/// Parse gift records from any reader.
pub fn parse_gifts<R: Read>(reader: R, capacity: u64) -> Result<IngestReport> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut report = IngestReport::default();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                debug!(%err, "discarding unreadable line");
                report.discarded += 1;
                continue;
            }
        };

        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        match parse_record(&record) {
            Ok(gift) if gift.grams > capacity => {
                return Err(PlannerError::Overweight {
                    child_id: gift.child_id,
                    grams: gift.grams,
                    capacity,
                });
            }
            Ok(gift) => report.gifts.push(gift),
            Err(reason) => {
                debug!(line, reason, "discarding malformed line");
                report.discarded += 1;
            }
        }
    }

    Ok(report)
}

fn parse_record(record: &csv::StringRecord) -> std::result::Result<Gift, &'static str> {
    if record.len() < 4 {
        return Err("expected four fields");
    }

    let child_id = record[0].parse::<u32>().map_err(|_| "invalid child id")?;
    let latitude = record[1].parse::<f64>().map_err(|_| "invalid latitude")?;
    let longitude = record[2].parse::<f64>().map_err(|_| "invalid longitude")?;
    let grams = record[3].parse::<u64>().map_err(|_| "invalid weight")?;

    if !valid_coordinate(latitude, longitude) {
        return Err("coordinate out of range");
    }
    if grams == 0 {
        return Err("weight must be positive");
    }

    Ok(Gift::new(child_id, latitude, longitude, grams))
}
