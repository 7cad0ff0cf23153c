//! Metrics aggregator: per `(location, year)` population sums.

use crate::model::{PyramidRow, Sex, YearMetrics};

/// Sum the matching rows' unsigned values, grouped by sex.
///
/// `total` is derived as `male + female`, never accumulated separately:
/// summing it in row order can round differently and break the identity.
/// Sums use `value`, never the signed plotting value, so the figures stay
/// positive magnitudes regardless of chart sign conventions. No data for the
/// selection yields the all-zeros metrics, not an error.
pub fn year_metrics(rows: &[PyramidRow], location: &str, year: i32) -> YearMetrics {
    let mut male = 0.0;
    let mut female = 0.0;

    for row in rows {
        if row.year != year || row.location != location {
            continue;
        }
        match row.sex {
            Sex::Male => male += row.value,
            Sex::Female => female += row.value,
            Sex::Both => {}
        }
    }

    let sex_ratio_pct = if female > 0.0 { male / female * 100.0 } else { 0.0 };

    YearMetrics {
        total: male + female,
        male,
        female,
        sex_ratio_pct,
    }
}
