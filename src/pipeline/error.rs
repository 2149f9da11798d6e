//! Error types for dataset preparation.
//!
//! This module defines the `PrepError` enum covering the failure classes of
//! the preparation pipeline. Anything not listed here (Polars failures, I/O)
//! propagates as a generic `anyhow` error with context attached.

use thiserror::Error;

/// Errors that can occur while preparing a dataset.
#[derive(Debug, Error)]
pub enum PrepError {
    /// The configured outcome column does not exist in the dataset.
    ///
    /// Raised before any row is touched so the caller can correct the
    /// configuration (e.g. a wrong `salary_col` value).
    #[error("outcome column '{0}' not found in dataset - update the configured column name to match the file")]
    MissingColumn(String),

    /// The outcome column contains no parseable numeric values.
    ///
    /// Every value coerced to null, so there is nothing to compute a median
    /// cutoff from and no row can be labeled.
    #[error("outcome column '{0}' has no numeric values - cannot compute a median cutoff")]
    NoOutcomeValues(String),

    /// The test fraction is outside the open interval (0, 1).
    #[error("test_size must be between 0 and 1 (exclusive), got {0}")]
    InvalidTestSize(f64),

    /// The label has fewer than two distinct classes.
    ///
    /// Stratified sampling is undefined with a single class; no partial
    /// result is returned.
    #[error("label has {0} distinct class(es) - stratified splitting requires 2")]
    SingleClass(usize),

    /// A label class has too few rows to appear on both sides of the split.
    #[error("label class {label} has only {count} row(s) - each class needs at least 2 for a stratified split")]
    ClassTooSmall {
        /// Label value of the undersized class
        label: i32,
        /// Number of rows carrying that label
        count: usize,
    },
}
