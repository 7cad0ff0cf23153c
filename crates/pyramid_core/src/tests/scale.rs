//! Tests for the axis scaler
//!
//! These tests verify:
//! - Tick symmetry: endpoints mirror, the midpoint is zero, spacing is even
//! - The 10% headroom and per-location (not per-year) maximum
//! - Both formatter precisions (axis ticks vs metric display)

use crate::dataset::Dataset;
use crate::model::Sex;
use crate::scale::{AxisScale, TICK_COUNT};

use super::record;

#[test]
fn test_tick_symmetry() {
    let scale = AxisScale::from_values([2_500_000.0, 1_000_000.0]).unwrap();

    assert_eq!(scale.max_magnitude, 2_500_000.0);
    assert_eq!(scale.tick_values.len(), TICK_COUNT);
    assert_eq!(scale.tick_values[0], -scale.tick_values[8]);
    assert_eq!(scale.tick_values[4], 0.0);

    let step = scale.tick_values[1] - scale.tick_values[0];
    for pair in scale.tick_values.windows(2) {
        assert!((pair[1] - pair[0] - step).abs() < 1e-6);
    }

    // Endpoints carry the 10% headroom.
    assert!((scale.tick_values[8] - 2_750_000.0).abs() < 1e-6);
}

#[test]
fn test_tick_labels_read_positive_on_both_sides() {
    let scale = AxisScale::from_values([1_000_000.0]).unwrap();

    assert_eq!(scale.tick_labels.len(), TICK_COUNT);
    assert_eq!(scale.tick_labels[0], scale.tick_labels[8]);
    assert!(scale.tick_labels.iter().all(|l| !l.starts_with('-')));
    assert_eq!(scale.tick_labels[8], "1.1M");
    assert_eq!(scale.tick_labels[4], "0");
}

#[test]
fn test_scale_spans_all_years_of_a_location() {
    // The axis must stay fixed across the animation: the maximum is taken
    // over every year the location has, not just the displayed frame.
    let records = vec![
        record("X", 1950, Sex::Male, 0, "0-4", 500.0),
        record("X", 2030, Sex::Female, 0, "0-4", 2_000.0),
        record("Y", 2030, Sex::Female, 0, "0-4", 9_999_999.0),
    ];
    let dataset = Dataset::from_records(&records).unwrap();

    let scale = dataset.axis_scale("X").unwrap();
    assert_eq!(scale.max_magnitude, 2_000.0);
    assert!((scale.range() - 2_200.0).abs() < 1e-9);

    // And per-location: Y's much larger values do not bleed into X's axis.
    let scale_y = dataset.axis_scale("Y").unwrap();
    assert_eq!(scale_y.max_magnitude, 9_999_999.0);

    assert!(dataset.axis_scale("Nowhere").is_none());
}

#[test]
fn test_formatter_variants_disagree_on_precision() {
    use crate::scale::{format_population, format_tick_label};

    // Same magnitude, different surfaces: 1 decimal on the axis, 2 in the
    // metric cells.
    assert_eq!(format_tick_label(2_500_000.0), "2.5M");
    assert_eq!(format_population(2_500_000.0), "2.50M");

    assert_eq!(format_tick_label(8_100_000_000.0), "8.1B");
    assert_eq!(format_population(8_100_000_000.0), "8.10B");

    assert_eq!(format_tick_label(12_300.0), "12K");
    assert_eq!(format_population(12_300.0), "12.3K");
}

#[test]
fn test_chart_inputs_for_missing_location() {
    let records = vec![record("X", 2020, Sex::Male, 0, "0-4", 1.0)];
    let dataset = Dataset::from_records(&records).unwrap();

    let inputs = dataset.chart_inputs("X").unwrap();
    assert_eq!(inputs.title, "Population Pyramid: X");
    assert_eq!(inputs.years, vec![2020]);
    assert_eq!(inputs.rows.len(), 1);

    let err = dataset.chart_inputs("Nowhere").unwrap_err();
    assert_eq!(err.location, "Nowhere");
    assert_eq!(err.to_string(), "no data available for Nowhere");
}
