//! Integration tests for the pyramid data pipeline
//!
//! Tests are organized by topic:
//! - `loader` - CSV schema validation and strict value contracts
//! - `transform` - Filtering, sign derivation, age ordering, frame sort
//! - `metrics` - Per-selection aggregation and the sex ratio
//! - `scale` - Axis symmetry and tick labeling

mod loader;
mod scale;

use crate::model::{PopulationRecord, Sex};

/// Shorthand row constructor for pipeline fixtures.
fn record(
    location: &str,
    year: i32,
    sex: Sex,
    age_start: i32,
    age_group: &str,
    value: f64,
) -> PopulationRecord {
    let sex_id = match sex {
        Sex::Male => 1,
        Sex::Female => 2,
        Sex::Both => 3,
    };
    PopulationRecord {
        location: location.to_string(),
        iso3: "XXX".to_string(),
        year,
        sex,
        sex_id,
        age_start,
        age_group: age_group.to_string(),
        value,
    }
}
