//! Feature column classification
//!
//! Splits feature columns into numeric and categorical sets based on their
//! dtype, so each set can be transformed appropriately. Every column lands in
//! exactly one set.

use polars::prelude::*;

/// Partition of feature columns by role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    /// Columns with a primitive numeric dtype
    pub numeric: Vec<String>,
    /// Everything else (strings, booleans, ...)
    pub categorical: Vec<String>,
}

/// Classify every column of `df` as numeric or categorical.
///
/// The classification is purely dtype-based: integer and float columns are
/// numeric, all other dtypes are treated as categories. It is computed once
/// per dataset and never revised after transformation begins.
pub fn classify_columns(df: &DataFrame) -> ColumnRoles {
    let mut roles = ColumnRoles::default();

    for column in df.get_columns() {
        let name = column.name().to_string();
        if column.dtype().is_primitive_numeric() {
            roles.numeric.push(name);
        } else {
            roles.categorical.push(name);
        }
    }

    roles
}
