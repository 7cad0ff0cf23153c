//! Pyramid transformer: raw records -> ordered plotting rows.
//!
//! Three steps, in order: drop the "Both sexes" aggregate rows, derive the
//! signed plotting value (Male negative, Female positive), and stable-sort by
//! `(year, age_start)`. Animation frames are cut at year boundaries and bars
//! within a frame follow age order, so the sort is the contract the renderer
//! depends on. Row multiplicity is preserved; nothing is aggregated here.

use rustc_hash::FxHashSet;

use crate::error::DataError;
use crate::model::age::require_age_rank;
use crate::model::{PopulationRecord, PyramidRow, Sex};

/// Build the ordered [`PyramidRow`] sequence from the full record set.
///
/// Fails with [`DataError`] if any retained row carries an age-group label
/// outside the canonical order, or an `AgeStart` that disagrees with it.
pub fn build_pyramid_rows(records: &[PopulationRecord]) -> Result<Vec<PyramidRow>, DataError> {
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        if record.sex == Sex::Both {
            continue;
        }
        let age_rank = require_age_rank(&record.age_group)?;

        // The sort keys on AgeStart; a value out of step with the label
        // would reorder bars within a frame, so reject it up front.
        let expected_start = age_rank as i32 * 5;
        if record.age_start != expected_start {
            return Err(DataError::AgeStartMismatch {
                age_group: record.age_group.clone(),
                age_start: record.age_start,
                expected: expected_start,
            });
        }

        rows.push(PyramidRow {
            location: record.location.clone(),
            iso3: record.iso3.clone(),
            year: record.year,
            sex: record.sex,
            age_start: record.age_start,
            age_group: record.age_group.clone(),
            age_rank,
            value: record.value,
            plot_value: record.sex.plot_sign() * record.value,
        });
    }

    rows.sort_by(|a, b| (a.year, a.age_start).cmp(&(b.year, b.age_start)));
    Ok(rows)
}

/// The sorted, duplicate-free set of locations in the transformed rows.
///
/// Computed from the filtered rows on purpose: the selectable set must match
/// what is renderable, so a location that only ever appears in "Both sexes"
/// rows (corrupt input) is excluded.
pub fn location_index(rows: &[PyramidRow]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut locations: Vec<String> = rows
        .iter()
        .filter(|row| seen.insert(row.location.as_str()))
        .map(|row| row.location.clone())
        .collect();
    locations.sort();
    locations
}

/// Distinct years, ascending.
pub fn year_index(years: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let mut seen = FxHashSet::default();
    let mut years: Vec<i32> = years.into_iter().filter(|&y| seen.insert(y)).collect();
    years.sort_unstable();
    years
}
