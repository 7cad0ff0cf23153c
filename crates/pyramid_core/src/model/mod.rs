pub mod age;
pub mod metrics;
pub mod record;

pub use age::{AGE_GROUPS, age_rank};
pub use metrics::YearMetrics;
pub use record::{PopulationRecord, PyramidRow, Sex};
