//! Tests for the CSV schema loader
//!
//! These tests verify:
//! - Header validation (missing required columns, extra columns, BOM prefix)
//! - Row-level coercion failures in strict mode
//! - The negative-value and unknown-SexId contracts

use std::io::Write;

use crate::dataset::Dataset;
use crate::error::{DataError, LoadError, SchemaError};
use crate::loader::{load_records, load_records_from_path};
use crate::model::Sex;

const HEADER: &str = "Location,Iso3,Time,Sex,SexId,AgeStart,Age,Value";

fn csv_with_rows(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

#[test]
fn test_loads_well_formed_rows() {
    let input = csv_with_rows(&[
        "World,XXX,2020,Male,1,0,0-4,339191.0",
        "World,XXX,2020,Female,2,0,0-4,317862.0",
        "World,XXX,2020,Both sexes,3,0,0-4,657053.0",
    ]);

    let records = load_records(input.as_bytes()).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].location, "World");
    assert_eq!(records[0].sex, Sex::Male);
    assert_eq!(records[2].sex, Sex::Both);
    assert_eq!(records[1].value, 317862.0);
}

#[test]
fn test_bom_prefix_is_tolerated() {
    let input = format!("\u{feff}{}", csv_with_rows(&["World,XXX,2020,Male,1,0,0-4,100.0"]));
    let records = load_records(input.as_bytes()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_extra_columns_are_ignored() {
    let input = "Location,Iso3,Time,Sex,SexId,AgeStart,Age,Value,VariantId\n\
                 World,XXX,2020,Female,2,0,0-4,100.0,4\n";
    let records = load_records(input.as_bytes()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value, 100.0);
}

#[test]
fn test_missing_column_is_a_schema_error() {
    // No Value column.
    let input = "Location,Iso3,Time,Sex,SexId,AgeStart,Age\n\
                 World,XXX,2020,Male,1,0,0-4\n";
    let err = load_records(input.as_bytes()).unwrap_err();
    match err {
        LoadError::Schema(SchemaError::MissingColumn(name)) => assert_eq!(name, "Value"),
        other => panic!("expected missing-column schema error, got {other:?}"),
    }
}

#[test]
fn test_unparseable_year_is_a_data_error() {
    let input = csv_with_rows(&["World,XXX,twenty-twenty,Male,1,0,0-4,100.0"]);
    let err = load_records(input.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::Data(DataError::Coercion { line: 2, .. })));
}

#[test]
fn test_negative_value_is_a_data_error() {
    let input = csv_with_rows(&[
        "World,XXX,2020,Male,1,0,0-4,100.0",
        "World,XXX,2020,Female,2,0,0-4,-5.0",
    ]);
    let err = load_records(input.as_bytes()).unwrap_err();
    match err {
        LoadError::Data(DataError::NegativeValue { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, -5.0);
        }
        other => panic!("expected negative-value data error, got {other:?}"),
    }
}

#[test]
fn test_unknown_sex_id_is_a_data_error() {
    let input = csv_with_rows(&["World,XXX,2020,Male,7,0,0-4,100.0"]);
    let err = load_records(input.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Data(DataError::UnknownSexId { line: 2, sex_id: 7 })
    ));
}

#[test]
fn test_unknown_age_label_fails_the_load() {
    // "105+" is not one of the 21 canonical buckets: the full load path must
    // reject it rather than silently carry an unplottable bucket.
    let input = csv_with_rows(&["World,XXX,2020,Male,1,105,105+,100.0"]);
    let err = Dataset::load(input.as_bytes()).unwrap_err();
    match err {
        LoadError::Data(DataError::UnknownAgeGroup { age_group }) => {
            assert_eq!(age_group, "105+");
        }
        other => panic!("expected unknown-age-group data error, got {other:?}"),
    }
}

#[test]
fn test_load_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("population.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", csv_with_rows(&["World,XXX,2020,Male,1,0,0-4,100.0"])).unwrap();
    drop(file);

    let records = load_records_from_path(&path).unwrap();
    assert_eq!(records.len(), 1);

    let missing = dir.path().join("does-not-exist.csv");
    let err = load_records_from_path(&missing).unwrap_err();
    assert!(matches!(err, LoadError::Schema(SchemaError::Io(_))));
}
