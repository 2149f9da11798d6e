//! Dataset presets
//!
//! The two supported datasets share the whole preparation pipeline; a preset
//! is nothing but a [`PrepConfig`] value plus a default file path. Anything
//! else with a numeric outcome column works through [`PrepConfig`] directly.

use anyhow::Result;
use std::path::Path;

use crate::pipeline::{load_csv, prepare_dataset, PrepConfig, PreparedData};

/// Default file name for the college completion dataset.
pub const COLLEGE_DEFAULT_PATH: &str = "cc_institution_details.csv";
/// Default file name for the job placement dataset.
pub const JOB_DEFAULT_PATH: &str = "job_placement.csv";
/// Default outcome column for the job placement dataset.
pub const DEFAULT_SALARY_COLUMN: &str = "salary";

/// Rows sampled for CSV schema inference.
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 10000;

/// College completion preset.
///
/// Label `high_grad_150` marks institutions whose 150%-time graduation rate
/// is above the dataset median. The drop list removes identifiers and the
/// graduation/retention measures the label is derived from or correlated
/// with.
pub fn college_completion_config() -> PrepConfig {
    PrepConfig::new("grad_150_value", "high_grad_150").with_drop_columns([
        "index",
        "unitid",
        "chronname",
        "site",
        "nicknames",
        "similar",
        "grad_150_value",
        "grad_100_value",
        "retain_value",
        "grad_100_percentile",
        "retain_percentile",
        "grad_150_percentile",
    ])
}

/// Job placement preset.
///
/// Label `above_median_salary` marks students whose salary is above the
/// dataset median. Placement datasets usually only record salaries for
/// placed students, so this models "high salary among known salaries".
/// Columns named `status` or `placed` (any casing) record the outcome after
/// the fact and are dropped wherever they appear.
pub fn job_placement_config(salary_col: &str) -> PrepConfig {
    PrepConfig::new(salary_col, "above_median_salary")
        .with_drop_name_matches(["status", "placed"])
}

/// Load and prepare the college completion dataset.
pub fn college_train_test(path: &Path, test_size: f64, seed: u64) -> Result<PreparedData> {
    let df = load_csv(path, DEFAULT_INFER_SCHEMA_LENGTH)?;
    let config = college_completion_config()
        .with_test_size(test_size)
        .with_seed(seed);
    prepare_dataset(df, &config)
}

/// Load and prepare the job placement dataset.
pub fn job_train_test(
    path: &Path,
    salary_col: &str,
    test_size: f64,
    seed: u64,
) -> Result<PreparedData> {
    let df = load_csv(path, DEFAULT_INFER_SCHEMA_LENGTH)?;
    let config = job_placement_config(salary_col)
        .with_test_size(test_size)
        .with_seed(seed);
    prepare_dataset(df, &config)
}
