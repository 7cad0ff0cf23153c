use serde::Deserialize;

/// Sex category as it appears in the source table.
///
/// `Both` is the pre-aggregated "Both sexes" category the UN export carries
/// alongside the per-sex rows. It is dropped by the transformer; a two-sided
/// pyramid only plots the per-sex rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Sex {
    Male,
    Female,
    #[serde(rename = "Both sexes", alias = "Both")]
    Both,
}

impl Sex {
    /// Deterministic sign applied to `value` when deriving the plotting
    /// value: Male bars extend left (negative), Female bars right (positive).
    pub fn plot_sign(self) -> f64 {
        match self {
            Sex::Male => -1.0,
            Sex::Female | Sex::Both => 1.0,
        }
    }
}

/// One row of the raw table, immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationRecord {
    pub location: String,
    pub iso3: String,
    pub year: i32,
    pub sex: Sex,
    pub sex_id: i32,
    pub age_start: i32,
    pub age_group: String,
    /// Population magnitude, always non-negative (enforced at load).
    pub value: f64,
}

/// A [`PopulationRecord`] restricted to Male/Female, carrying the derived
/// signed plotting value and the resolved canonical age rank.
///
/// Invariants: `plot_value.abs() == value`; `plot_value < 0` iff the row is
/// Male (for `value > 0`); `age_rank` agrees with `age_start` order.
#[derive(Debug, Clone, PartialEq)]
pub struct PyramidRow {
    pub location: String,
    pub iso3: String,
    pub year: i32,
    pub sex: Sex,
    pub age_start: i32,
    pub age_group: String,
    pub age_rank: usize,
    pub value: f64,
    pub plot_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_sign() {
        assert_eq!(Sex::Male.plot_sign(), -1.0);
        assert_eq!(Sex::Female.plot_sign(), 1.0);
    }
}
