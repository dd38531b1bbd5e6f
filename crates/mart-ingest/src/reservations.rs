use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use mart_model::RawReservation;

use crate::error::{ExtractionError, Result};

/// Read the reservation log: a JSON array of reservation objects.
pub fn read_reservations(path: &Path) -> Result<Vec<RawReservation>> {
    let file = File::open(path).map_err(|source| ExtractionError::io(path, source))?;
    let reservations: Vec<RawReservation> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| ExtractionError::json(path, source))?;
    debug!(
        path = %path.display(),
        record_count = reservations.len(),
        "read reservation log"
    );
    Ok(reservations)
}
