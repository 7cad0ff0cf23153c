//! Population pyramid data pipeline
//!
//! This crate turns a long-format demographic table (UN World Population
//! Prospects data-portal export) into the exact shape an animated two-sided
//! pyramid chart needs:
//! - Schema loader: typed CSV parsing against a fixed column set
//! - Pyramid transformer: per-sex filtering, signed plotting values, canonical
//!   age ordering, deterministic animation-frame sort
//! - Location index: the selectable set of locations
//! - Metrics aggregator: per `(location, year)` population sums and sex ratio
//! - Axis scaler: symmetric per-location axis with human-readable tick labels
//!
//! Everything is a pure function over immutable data; [`dataset::Dataset`]
//! caches the loaded table for the process lifetime.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod scale;
pub mod transform;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use dataset::{ChartInputs, Dataset};
pub use error::{DataError, LoadError, SchemaError, SelectionError};
pub use model::{AGE_GROUPS, PopulationRecord, PyramidRow, Sex, YearMetrics};
pub use scale::{AxisScale, format_population, format_tick_label};
