//! Per-selection population summaries.

use crate::scale::format_population;

/// Population sums for one `(location, year)` selection.
///
/// Sums are over the unsigned `value`, never the signed plotting value, so
/// all fields report positive magnitudes. An empty selection yields the
/// all-zeros value rather than an error; the caller decides whether that is
/// user-visible. Cheap to compute, recomputed per query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YearMetrics {
    pub total: f64,
    pub male: f64,
    pub female: f64,
    /// Male population as a percentage of female population; `0` when there
    /// is no female population to divide by.
    pub sex_ratio_pct: f64,
}

impl YearMetrics {
    /// The four display strings for the metrics row: total, male, female
    /// (metric-display precision) and the sex ratio as a percentage.
    #[must_use]
    pub fn display_strings(&self) -> [String; 4] {
        [
            format_population(self.total),
            format_population(self.male),
            format_population(self.female),
            format!("{:.1}%", self.sex_ratio_pct),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings() {
        let metrics = YearMetrics {
            total: 190.0,
            male: 100.0,
            female: 90.0,
            sex_ratio_pct: 111.11,
        };
        assert_eq!(
            metrics.display_strings(),
            ["190", "100", "90", "111.1%"].map(String::from)
        );
    }

    #[test]
    fn test_default_is_all_zeros() {
        let metrics = YearMetrics::default();
        assert_eq!(metrics.total, 0.0);
        assert_eq!(metrics.sex_ratio_pct, 0.0);
    }
}
