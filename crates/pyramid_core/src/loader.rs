//! Schema loader: CSV source table -> typed [`PopulationRecord`] collection.
//!
//! The source is a UN data-portal export: comma separated, UTF-8 (an optional
//! byte-order-mark prefix is tolerated), one header row. The required columns
//! are validated up front so a missing column reports as a schema problem
//! with the column name, not as a per-row deserialization failure. Extra
//! columns are ignored. The loader is strict: the first row that fails a
//! value contract aborts the load.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DataError, LoadError, SchemaError};
use crate::model::{PopulationRecord, Sex};

/// Columns the schema requires, by header name.
const REQUIRED_COLUMNS: [&str; 8] = [
    "Location", "Iso3", "Time", "Sex", "SexId", "AgeStart", "Age", "Value",
];

/// `SexId` values the source encodes: 1 = Male, 2 = Female, 3 = Both sexes.
const KNOWN_SEX_IDS: [i32; 3] = [1, 2, 3];

/// The raw row shape as serde sees it. Field names map to the export's
/// header names; unlisted columns are skipped by the deserializer.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Iso3")]
    iso3: String,
    #[serde(rename = "Time")]
    year: i32,
    #[serde(rename = "Sex")]
    sex: Sex,
    #[serde(rename = "SexId")]
    sex_id: i32,
    #[serde(rename = "AgeStart")]
    age_start: i32,
    #[serde(rename = "Age")]
    age_group: String,
    #[serde(rename = "Value")]
    value: f64,
}

/// Load and type-check the full table from a file.
pub fn load_records_from_path(path: &Path) -> Result<Vec<PopulationRecord>, LoadError> {
    let file = File::open(path).map_err(SchemaError::Io)?;
    load_records(file)
}

/// Load and type-check the full table from any reader.
pub fn load_records<R: io::Read>(reader: R) -> Result<Vec<PopulationRecord>, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);

    validate_headers(&mut rdr)?;

    let mut records = Vec::new();
    for (i, result) in rdr.deserialize::<RawRow>().enumerate() {
        // Header is line 1, first data row is line 2.
        let line = i as u64 + 2;
        let raw = result.map_err(|e| DataError::Coercion { line, detail: e })?;

        if raw.value < 0.0 {
            return Err(DataError::NegativeValue {
                line,
                value: raw.value,
            }
            .into());
        }
        if !KNOWN_SEX_IDS.contains(&raw.sex_id) {
            return Err(DataError::UnknownSexId {
                line,
                sex_id: raw.sex_id,
            }
            .into());
        }

        records.push(PopulationRecord {
            location: raw.location,
            iso3: raw.iso3,
            year: raw.year,
            sex: raw.sex,
            sex_id: raw.sex_id,
            age_start: raw.age_start,
            age_group: raw.age_group,
            value: raw.value,
        });
    }

    Ok(records)
}

/// Check that every required column is present in the header row.
fn validate_headers<R: io::Read>(rdr: &mut csv::Reader<R>) -> Result<(), SchemaError> {
    let headers = rdr.headers().map_err(SchemaError::Csv)?;
    // The csv reader strips a leading UTF-8 BOM itself; trimming again here
    // keeps the check independent of that behavior.
    let names: Vec<&str> = headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}'))
        .collect();

    for required in REQUIRED_COLUMNS {
        if !names.contains(&required) {
            return Err(SchemaError::MissingColumn(required));
        }
    }
    Ok(())
}
