//! Load-once dataset facade.
//!
//! The source table is large (hundreds of locations x 81 years x 21 ages x 2
//! sexes) but static for the life of the process, so it is parsed and
//! transformed exactly once. Every user interaction afterwards is a cheap
//! re-filter over the cached rows; nothing here mutates after construction
//! and the only invalidation is an explicit reload.

use std::io;
use std::path::Path;

use crate::aggregate::year_metrics;
use crate::error::{DataError, LoadError, SelectionError};
use crate::loader::{load_records, load_records_from_path};
use crate::model::{PopulationRecord, PyramidRow, YearMetrics};
use crate::scale::AxisScale;
use crate::transform::{build_pyramid_rows, location_index, year_index};

/// The parsed and transformed table plus its derived indexes.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<PyramidRow>,
    locations: Vec<String>,
    years: Vec<i32>,
}

/// Everything the chart renderer needs for one location: the location's rows
/// for all years (animation frames are cut at year boundaries), the fixed
/// axis scale, the distinct years, and a display title.
#[derive(Debug, Clone)]
pub struct ChartInputs<'a> {
    pub rows: Vec<&'a PyramidRow>,
    pub years: Vec<i32>,
    pub scale: AxisScale,
    pub title: String,
}

impl Dataset {
    /// Transform an already-loaded record collection.
    pub fn from_records(records: &[PopulationRecord]) -> Result<Self, DataError> {
        let rows = build_pyramid_rows(records)?;
        let locations = location_index(&rows);
        let years = year_index(rows.iter().map(|row| row.year));
        Ok(Dataset {
            rows,
            locations,
            years,
        })
    }

    /// Load, type-check, and transform the table from a CSV file.
    pub fn load_from_path(path: &Path) -> Result<Self, LoadError> {
        let records = load_records_from_path(path)?;
        Ok(Self::from_records(&records)?)
    }

    /// Load, type-check, and transform the table from any reader.
    pub fn load<R: io::Read>(reader: R) -> Result<Self, LoadError> {
        let records = load_records(reader)?;
        Ok(Self::from_records(&records)?)
    }

    /// All transformed rows, sorted by `(year, age_start)`.
    pub fn rows(&self) -> &[PyramidRow] {
        &self.rows
    }

    /// Sorted unique locations with renderable (per-sex) data.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Distinct years across the whole table, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// One location's rows across all years, in animation order.
    pub fn location_rows(&self, location: &str) -> Vec<&PyramidRow> {
        self.rows
            .iter()
            .filter(|row| row.location == location)
            .collect()
    }

    /// Distinct years with data for one location, ascending.
    pub fn location_years(&self, location: &str) -> Vec<i32> {
        year_index(
            self.rows
                .iter()
                .filter(|row| row.location == location)
                .map(|row| row.year),
        )
    }

    /// The bars for a single animation frame, in age order.
    pub fn frame_rows(&self, location: &str, year: i32) -> Vec<&PyramidRow> {
        self.rows
            .iter()
            .filter(|row| row.year == year && row.location == location)
            .collect()
    }

    /// Population sums for one `(location, year)` selection. All zeros when
    /// the selection matches nothing.
    pub fn metrics(&self, location: &str, year: i32) -> YearMetrics {
        year_metrics(&self.rows, location, year)
    }

    /// Fixed axis scale for one location, over all of its years.
    pub fn axis_scale(&self, location: &str) -> Option<AxisScale> {
        AxisScale::from_values(
            self.rows
                .iter()
                .filter(|row| row.location == location)
                .map(|row| row.value),
        )
    }

    /// Everything the renderer needs for one location, or a
    /// [`SelectionError`] when the location has no renderable rows.
    pub fn chart_inputs(&self, location: &str) -> Result<ChartInputs<'_>, SelectionError> {
        let rows = self.location_rows(location);
        let scale =
            AxisScale::from_values(rows.iter().map(|row| row.value)).ok_or_else(|| {
                SelectionError {
                    location: location.to_string(),
                    year: None,
                }
            })?;
        let years = year_index(rows.iter().map(|row| row.year));

        Ok(ChartInputs {
            rows,
            years,
            scale,
            title: format!("Population Pyramid: {location}"),
        })
    }
}
