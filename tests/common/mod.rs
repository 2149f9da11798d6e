//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a synthetic classification dataset with known characteristics.
///
/// 100 rows with:
/// - `id`: identifier column (to be dropped)
/// - `score`: numeric feature with 10% missing values
/// - `category`: 3-level categorical feature with 10% missing values
/// - `outcome`: numeric outcome 0..100, median 49.5, so exactly half the
///   rows label 1
pub fn create_synthetic_dataframe() -> DataFrame {
    let n = 100usize;
    let categories = ["alpha", "beta", "gamma"];

    let id: Vec<i64> = (0..n).map(|i| 1000 + i as i64).collect();
    let score: Vec<Option<f64>> = (0..n)
        .map(|i| {
            if i % 10 == 7 {
                None
            } else {
                Some((i * 37 % 100) as f64)
            }
        })
        .collect();
    let category: Vec<Option<&str>> = (0..n)
        .map(|i| {
            if i % 10 == 3 {
                None
            } else {
                Some(categories[i % 3])
            }
        })
        .collect();
    let outcome: Vec<f64> = (0..n).map(|i| i as f64).collect();

    df! {
        "id" => id,
        "score" => score,
        "category" => category,
        "outcome" => outcome,
    }
    .unwrap()
}

/// Create a small job placement dataset in the shape of the real file.
pub fn create_job_placement_dataframe() -> DataFrame {
    let n = 20usize;
    let genders = ["M", "F"];
    let streams = ["cs", "ee", "me"];

    let name: Vec<String> = (0..n).map(|i| format!("student_{}", i)).collect();
    let gender: Vec<&str> = (0..n).map(|i| genders[i % 2]).collect();
    let stream: Vec<&str> = (0..n).map(|i| streams[i % 3]).collect();
    let gpa: Vec<f64> = (0..n).map(|i| 2.0 + (i as f64) * 0.1).collect();
    let status: Vec<&str> = (0..n)
        .map(|i| if i % 5 == 0 { "Not Placed" } else { "Placed" })
        .collect();
    // Two unknown salaries; the rest spread evenly around their median
    let salary: Vec<Option<f64>> = (0..n)
        .map(|i| {
            if i % 10 == 9 {
                None
            } else {
                Some(30000.0 + (i as f64) * 1000.0)
            }
        })
        .collect();

    df! {
        "name" => name,
        "gender" => gender,
        "stream" => stream,
        "gpa" => gpa,
        "status" => status,
        "salary" => salary,
    }
    .unwrap()
}

/// Create a small college completion dataset in the shape of the real file.
pub fn create_college_dataframe() -> DataFrame {
    let n = 20usize;
    let controls = ["Public", "Private not-for-profit"];

    let unitid: Vec<i64> = (0..n).map(|i| 100000 + i as i64).collect();
    let chronname: Vec<String> = (0..n).map(|i| format!("College {}", i)).collect();
    let control: Vec<&str> = (0..n).map(|i| controls[i % 2]).collect();
    let student_count: Vec<f64> = (0..n).map(|i| 1000.0 + (i as f64) * 250.0).collect();
    let grad_150_value: Vec<f64> = (0..n).map(|i| (i as f64) * 5.0).collect();
    let grad_100_value: Vec<f64> = (0..n).map(|i| (i as f64) * 4.0).collect();

    df! {
        "unitid" => unitid,
        "chronname" => chronname,
        "control" => control,
        "student_count" => student_count,
        "grad_150_value" => grad_150_value,
        "grad_100_value" => grad_100_value,
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual.iter().any(|c| c == col),
            "Expected column '{}' in {:?}",
            col,
            actual
        );
    }
}

/// Assert that a DataFrame does not contain specific columns
pub fn assert_missing_columns(df: &DataFrame, unexpected_cols: &[&str]) {
    let actual: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in unexpected_cols {
        assert!(
            !actual.iter().any(|c| c == col),
            "Column '{}' should have been removed, got {:?}",
            col,
            actual
        );
    }
}
