use std::fmt;
use std::io;

/// Errors caused by the structure of the source table: the file cannot be
/// read at all or a required column is missing. Always fatal to the load.
#[derive(Debug)]
pub enum SchemaError {
    MissingColumn(&'static str),
    Csv(csv::Error),
    Io(io::Error),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::MissingColumn(name) => {
                write!(f, "required column {name:?} is missing from the header")
            }
            SchemaError::Csv(e) => write!(f, "unreadable table: {e}"),
            SchemaError::Io(e) => write!(f, "cannot read source file: {e}"),
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchemaError::Csv(e) => Some(e),
            SchemaError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SchemaError {
    fn from(e: io::Error) -> Self {
        SchemaError::Io(e)
    }
}

/// Errors caused by a row that violates a value-level contract. The loader
/// runs in strict mode: the first bad row aborts the whole load, since a
/// corrupt row almost always means the file does not match the expected
/// export format.
#[derive(Debug)]
pub enum DataError {
    /// Population values are magnitudes; a negative value is corrupt input,
    /// not a usable signed quantity.
    NegativeValue { line: u64, value: f64 },
    /// `SexId` outside the known {1, 2, 3} set.
    UnknownSexId { line: u64, sex_id: i32 },
    /// An age-group label not in the canonical 21-bucket order.
    UnknownAgeGroup { age_group: String },
    /// `AgeStart` disagrees with the label's canonical bucket. The sort keys
    /// on `AgeStart`, so a mismatch would silently reorder bars in a frame.
    AgeStartMismatch {
        age_group: String,
        age_start: i32,
        expected: i32,
    },
    /// A field that failed type coercion (year, value, ...).
    Coercion { line: u64, detail: csv::Error },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::NegativeValue { line, value } => {
                write!(f, "line {line}: negative population value {value}")
            }
            DataError::UnknownSexId { line, sex_id } => {
                write!(f, "line {line}: unknown SexId {sex_id}")
            }
            DataError::UnknownAgeGroup { age_group } => {
                write!(f, "age group {age_group:?} is not a canonical age bucket")
            }
            DataError::AgeStartMismatch {
                age_group,
                age_start,
                expected,
            } => {
                write!(
                    f,
                    "age group {age_group:?} has AgeStart {age_start}, expected {expected}"
                )
            }
            DataError::Coercion { line, detail } => {
                write!(f, "line {line}: {detail}")
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Coercion { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

/// Umbrella error for the load path (file -> records -> pyramid rows).
#[derive(Debug)]
pub enum LoadError {
    Schema(SchemaError),
    Data(DataError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Schema(e) => write!(f, "{e}"),
            LoadError::Data(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Schema(e) => Some(e),
            LoadError::Data(e) => Some(e),
        }
    }
}

impl From<SchemaError> for LoadError {
    fn from(e: SchemaError) -> Self {
        LoadError::Schema(e)
    }
}

impl From<DataError> for LoadError {
    fn from(e: DataError) -> Self {
        LoadError::Data(e)
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Schema(SchemaError::Io(e))
    }
}

/// A user-supplied location or year with no matching rows. Recovered in the
/// presentation layer ("no data available"), never propagated as a crash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionError {
    pub location: String,
    pub year: Option<i32>,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "no data available for {} in {year}", self.location),
            None => write!(f, "no data available for {}", self.location),
        }
    }
}

impl std::error::Error for SelectionError {}
