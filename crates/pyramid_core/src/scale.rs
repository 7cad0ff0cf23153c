//! Axis scaler and the two population formatters.
//!
//! The chart axis is symmetric around zero and fixed per location across all
//! of that location's years, so bars do not rescale between animation frames.
//! Tick labels read positive on both sides: sign is a left/right positional
//! encoding, not a quantity.
//!
//! Two formatters exist on purpose, at different precisions for different
//! surfaces: [`format_tick_label`] for axis ticks (1 decimal for B/M, whole
//! K) and [`format_population`] for the single-number metric cells (2
//! decimals for B/M, 1 for K).

/// Number of axis ticks, endpoints included. Odd, so the midpoint tick sits
/// exactly at zero.
pub const TICK_COUNT: usize = 9;

/// Headroom multiplier applied to the maximum bar magnitude on each side.
const HEADROOM: f64 = 1.1;

/// Symmetric axis domain and tick set for one location's chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScale {
    /// Largest single-sex population value in the location's rows.
    pub max_magnitude: f64,
    /// Evenly spaced positions spanning `[-max*1.1, +max*1.1]` inclusive.
    pub tick_values: [f64; TICK_COUNT],
    /// Formatted absolute value of each tick, parallel to `tick_values`.
    pub tick_labels: [String; TICK_COUNT],
}

impl AxisScale {
    /// Scale from a location's unsigned population values across all of its
    /// years.
    ///
    /// Returns `None` for an empty input; the caller treats that as a
    /// no-data selection rather than inventing a zero-width axis.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<AxisScale> {
        let max_magnitude = values.into_iter().fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |m| m.max(v)))
        })?;

        let range = max_magnitude * HEADROOM;
        let step = 2.0 * range / (TICK_COUNT - 1) as f64;

        let tick_values = std::array::from_fn(|i| -range + step * i as f64);
        let tick_labels = std::array::from_fn(|i| format_tick_label(tick_values[i]));

        Some(AxisScale {
            max_magnitude,
            tick_values,
            tick_labels,
        })
    }

    /// The positive axis bound (`max_magnitude * 1.1`).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max_magnitude * HEADROOM
    }
}

/// Format an axis tick as a readable magnitude (always positive).
pub fn format_tick_label(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.1}B", abs / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", abs / 1e6)
    } else if abs >= 1e3 {
        format!("{:.0}K", abs / 1e3)
    } else {
        format!("{abs:.0}")
    }
}

/// Format a population figure for the metric cells.
pub fn format_population(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_label_thresholds() {
        assert_eq!(format_tick_label(2_500_000.0), "2.5M");
        assert_eq!(format_tick_label(-2_500_000.0), "2.5M");
        assert_eq!(format_tick_label(1_400_000_000.0), "1.4B");
        assert_eq!(format_tick_label(75_000.0), "75K");
        assert_eq!(format_tick_label(420.0), "420");
        assert_eq!(format_tick_label(0.0), "0");
    }

    #[test]
    fn test_population_thresholds() {
        assert_eq!(format_population(2_500_000.0), "2.50M");
        assert_eq!(format_population(1_412_345_678.0), "1.41B");
        assert_eq!(format_population(75_500.0), "75.5K");
        assert_eq!(format_population(420.0), "420");
    }

    #[test]
    fn test_empty_input_has_no_scale() {
        assert!(AxisScale::from_values(std::iter::empty()).is_none());
    }
}
