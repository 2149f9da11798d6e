//! Target derivation via a median cutoff
//!
//! Binarizes a numeric outcome column: rows above the dataset median get
//! label 1, everything else gets 0. Rows whose outcome is missing or does not
//! parse as a number cannot be labeled and are dropped.

use anyhow::{Context, Result};
use polars::prelude::*;

use super::error::PrepError;

/// Cutoff statistic computed while deriving the target.
#[derive(Debug, Clone)]
pub struct TargetCutoff {
    /// Outcome column the cutoff was computed from
    pub column: String,
    /// Median of the outcome column over all labeled rows
    pub cutoff: f64,
    /// Rows removed because their outcome was missing or unparseable
    pub rows_dropped: usize,
}

/// Derive a binary label column from a numeric outcome column.
///
/// The outcome column is coerced to `Float64` (unparseable values become
/// null), rows with a null outcome are removed, and the remaining values are
/// compared against their median. The label is 1 iff the value is strictly
/// greater than the median.
///
/// The median is taken over the whole dataset before any train/test split:
/// the label is defined relative to the full population, matching how the
/// source datasets define "high completion" and "above-median salary".
///
/// # Errors
/// - [`PrepError::MissingColumn`] if `outcome` is not a column of `df`
/// - [`PrepError::NoOutcomeValues`] if no value in `outcome` parses as a number
pub fn derive_binary_target(
    df: DataFrame,
    outcome: &str,
    label: &str,
) -> Result<(DataFrame, TargetCutoff)> {
    let outcome_col = df
        .column(outcome)
        .map_err(|_| PrepError::MissingColumn(outcome.to_string()))?;

    let rows_before = df.height();

    let coerced = outcome_col
        .cast(&DataType::Float64)
        .with_context(|| format!("Outcome column '{}' cannot be coerced to numeric", outcome))?;

    let mut df = df;
    df.with_column(coerced)?;

    // Rows without a known outcome cannot be labeled
    let known = df
        .column(outcome)?
        .as_materialized_series()
        .is_not_null();
    let df = df.filter(&known)?;

    let values = df.column(outcome)?.f64()?;
    let cutoff = values
        .median()
        .ok_or_else(|| PrepError::NoOutcomeValues(outcome.to_string()))?;

    let labels: Vec<i32> = values
        .into_iter()
        .map(|v| match v {
            Some(x) if x > cutoff => 1,
            _ => 0,
        })
        .collect();

    let mut df = df;
    df.with_column(Column::new(label.into(), labels))?;

    let stats = TargetCutoff {
        column: outcome.to_string(),
        cutoff,
        rows_dropped: rows_before - df.height(),
    };

    Ok((df, stats))
}
