//! Dataset loader for delimited-text files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Load a CSV dataset into memory.
///
/// `infer_schema_length` controls how many rows Polars scans to decide column
/// types; columns whose sampled values all parse as numbers come back numeric,
/// everything else comes back as strings. Use 0 for a full-table scan.
pub fn load_csv(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let infer = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(infer)
        .finish()
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;

    Ok(df)
}

/// Read just the header of a CSV file and return its column names.
pub fn csv_column_names(path: &Path) -> Result<Vec<String>> {
    let df = LazyCsvReader::new(path)
        .with_n_rows(Some(0))
        .finish()
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to read CSV header: {}", path.display()))?;

    Ok(df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect())
}
