//! Unit tests for the CSV loader

use polars::prelude::*;
use tabprep::pipeline::{csv_column_names, load_csv};

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_load_csv_infers_mixed_types() {
    let mut df = create_job_placement_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    let loaded = load_csv(&csv_path, 100).unwrap();

    assert_eq!(loaded.shape(), (20, 6));
    assert!(loaded.column("gpa").unwrap().dtype().is_primitive_numeric());
    assert_eq!(loaded.column("gender").unwrap().dtype(), &DataType::String);
}

#[test]
fn test_load_csv_missing_file_has_context() {
    let err = load_csv(std::path::Path::new("no_such_file.csv"), 100).unwrap_err();
    assert!(err.to_string().contains("no_such_file.csv"));
}

#[test]
fn test_csv_column_names_reads_header_only() {
    let mut df = create_college_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    let names = csv_column_names(&csv_path).unwrap();

    assert_eq!(
        names,
        vec![
            "unitid",
            "chronname",
            "control",
            "student_count",
            "grad_150_value",
            "grad_100_value"
        ]
    );
}

#[test]
fn test_full_schema_scan() {
    let mut df = create_synthetic_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    // infer_schema_length of 0 means scan everything
    let loaded = load_csv(&csv_path, 0).unwrap();
    assert_eq!(loaded.height(), 100);
}
