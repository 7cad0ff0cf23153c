//! The canonical five-year age bucket order.
//!
//! Every age label in the source table must be one of these 21 buckets. The
//! order doubles as the bar order on the chart's vertical axis, so membership
//! is validated at load time rather than trusting data iteration order.

use crate::error::DataError;

/// The 21 standard five-year age buckets, youngest first.
pub const AGE_GROUPS: [&str; 21] = [
    "0-4", "5-9", "10-14", "15-19", "20-24", "25-29", "30-34", "35-39", "40-44", "45-49", "50-54",
    "55-59", "60-64", "65-69", "70-74", "75-79", "80-84", "85-89", "90-94", "95-99", "100+",
];

/// Position of a label in the canonical order, or `None` for unknown labels.
pub fn age_rank(label: &str) -> Option<usize> {
    AGE_GROUPS.iter().position(|&g| g == label)
}

/// Like [`age_rank`] but treats an unknown label as corrupt input.
pub fn require_age_rank(label: &str) -> Result<usize, DataError> {
    age_rank(label).ok_or_else(|| DataError::UnknownAgeGroup {
        age_group: label.to_string(),
    })
}
