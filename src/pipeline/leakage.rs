//! Leakage column removal
//!
//! Drops identifier columns and anything that reveals the label: the outcome
//! column itself, columns explicitly listed in the configuration, and columns
//! whose name matches a configured set case-insensitively (e.g. `status` /
//! `placed` in placement data, which record the outcome after the fact).

use polars::prelude::*;

/// Columns to remove before feature processing.
#[derive(Debug, Clone, Default)]
pub struct DropSpec {
    /// Exact column names to drop
    pub columns: Vec<String>,
    /// Case-insensitive column names to drop wherever they appear
    pub name_matches: Vec<String>,
}

impl DropSpec {
    /// Resolve the drop spec against an actual schema.
    ///
    /// Removal is best-effort: names with no matching column are skipped
    /// silently, since dataset schemas vary by source revision.
    pub fn resolve(&self, df: &DataFrame) -> Vec<String> {
        let lowered: Vec<String> = self.name_matches.iter().map(|m| m.to_lowercase()).collect();

        df.get_column_names()
            .iter()
            .filter(|name| {
                self.columns.iter().any(|c| c == name.as_str())
                    || lowered.iter().any(|m| *m == name.to_lowercase())
            })
            .map(|name| name.to_string())
            .collect()
    }
}

/// Remove leakage and identifier columns from the dataset.
///
/// Returns the filtered frame and the names actually removed, in schema order.
pub fn drop_leakage_columns(df: DataFrame, spec: &DropSpec) -> (DataFrame, Vec<String>) {
    let dropped = spec.resolve(&df);
    let df = df.drop_many(&dropped);
    (df, dropped)
}
