use std::fs::File;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::Error;
use crate::model::Facility;

/// One row of the facility table. Extra columns are ignored; the name is
/// optional.
#[derive(Debug, Deserialize)]
struct FacilityRecord {
    #[serde(default)]
    name: Option<String>,
    latitude: f64,
    longitude: f64,
}

/// Load the facility table from a CSV file. Row order is significant: the
/// row index becomes the facility's stable node id.
///
/// # Errors
///
/// [`Error::MissingData`] when the file does not exist, and
/// [`Error::InvalidData`] naming the offending row when a record cannot be
/// parsed.
pub fn load_facilities(path: &Path) -> Result<Vec<Facility>, Error> {
    if !path.exists() {
        return Err(Error::MissingData(format!(
            "facility table not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut facilities = Vec::new();
    for (idx, result) in reader.deserialize::<FacilityRecord>().enumerate() {
        let record =
            result.map_err(|e| Error::InvalidData(format!("facility row {idx}: {e}")))?;
        facilities.push(Facility::new(
            idx,
            record.latitude,
            record.longitude,
            record.name,
        ));
    }

    info!("Loaded {} facilities from {}", facilities.len(), path.display());
    Ok(facilities)
}
