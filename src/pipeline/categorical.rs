//! Categorical feature transformer
//!
//! Imputes missing categories with the training mode, then one-hot encodes
//! against the vocabulary observed during fitting. Categories that only show
//! up at transform time encode as all-zero indicators; they never add an
//! output column and never raise.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::collections::BTreeMap;

/// Per-column vocabulary captured during `fit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryVocab {
    /// Most frequent training value, used to fill missing entries.
    /// Frequency ties break toward the lexicographically smallest value.
    pub mode: String,
    /// Distinct training categories in sorted order; fixes the indicator
    /// column order for every later transform
    pub categories: Vec<String>,
}

/// Imputes and one-hot encodes a fixed set of categorical columns.
#[derive(Debug, Clone)]
pub struct CategoricalTransformer {
    columns: Vec<(String, CategoryVocab)>,
}

impl CategoricalTransformer {
    /// Fit the imputation mode and category vocabulary on the training partition.
    pub fn fit(df: &DataFrame, columns: &[String]) -> Result<Self> {
        let mut fitted = Vec::with_capacity(columns.len());

        for name in columns {
            let values = column_as_strings(
                df.column(name)
                    .with_context(|| format!("Categorical column '{}' not found during fit", name))?,
            )?;

            let mut counts: BTreeMap<String, usize> = BTreeMap::new();
            for value in values.into_iter().flatten() {
                *counts.entry(value).or_insert(0) += 1;
            }

            if counts.is_empty() {
                anyhow::bail!(
                    "Categorical column '{}' has no non-missing training values",
                    name
                );
            }

            // BTreeMap iterates in key order, so `>` keeps the smallest key on ties
            let mut mode = String::new();
            let mut best = 0usize;
            for (value, count) in &counts {
                if *count > best {
                    best = *count;
                    mode = value.clone();
                }
            }

            let categories: Vec<String> = counts.into_keys().collect();
            fitted.push((name.clone(), CategoryVocab { mode, categories }));
        }

        Ok(Self { columns: fitted })
    }

    /// One-hot encode any partition against the fitted vocabulary.
    ///
    /// Output columns are named `{column}_{category}` and appear in fit-time
    /// order. A value outside the vocabulary leaves its entire indicator
    /// group at zero.
    pub fn transform(&self, df: &DataFrame) -> Result<Vec<Column>> {
        let mut out = Vec::new();

        for (name, vocab) in &self.columns {
            let values = column_as_strings(
                df.column(name).with_context(|| {
                    format!("Categorical column '{}' missing at transform time", name)
                })?,
            )?;

            let mut indicators = vec![vec![0.0f64; values.len()]; vocab.categories.len()];
            for (row, value) in values.iter().enumerate() {
                let value = value.as_deref().unwrap_or(vocab.mode.as_str());
                if let Ok(slot) = vocab.categories.binary_search_by(|c| c.as_str().cmp(value)) {
                    indicators[slot][row] = 1.0;
                }
            }

            for (category, column) in vocab.categories.iter().zip(indicators) {
                out.push(Column::new(
                    format!("{}_{}", name, category).into(),
                    column,
                ));
            }
        }

        Ok(out)
    }

    /// Fitted vocabularies in column order.
    pub fn vocabs(&self) -> &[(String, CategoryVocab)] {
        &self.columns
    }

    /// Total number of indicator columns this transformer emits.
    pub fn encoded_width(&self) -> usize {
        self.columns.iter().map(|(_, v)| v.categories.len()).sum()
    }
}

/// Convert a column to string values for counting and comparison.
fn column_as_strings(col: &Column) -> Result<Vec<Option<String>>> {
    let cast = col.cast(&DataType::String)?;
    let values = cast
        .str()?
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect();
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train_frame() -> DataFrame {
        df! {
            "region" => [Some("west"), Some("east"), None, Some("west"), Some("south")],
        }
        .unwrap()
    }

    #[test]
    fn fit_captures_mode_and_sorted_vocabulary() {
        let t = CategoricalTransformer::fit(&train_frame(), &["region".to_string()]).unwrap();
        let (_, vocab) = &t.vocabs()[0];

        assert_eq!(vocab.mode, "west");
        assert_eq!(vocab.categories, vec!["east", "south", "west"]);
    }

    #[test]
    fn mode_ties_break_lexicographically() {
        let df = df! {
            "c" => ["b", "a", "b", "a"],
        }
        .unwrap();

        let t = CategoricalTransformer::fit(&df, &["c".to_string()]).unwrap();
        assert_eq!(t.vocabs()[0].1.mode, "a");
    }

    #[test]
    fn transform_encodes_in_fit_time_order() {
        let t = CategoricalTransformer::fit(&train_frame(), &["region".to_string()]).unwrap();

        let test = df! {
            "region" => [Some("south"), None],
        }
        .unwrap();

        let cols = t.transform(&test).unwrap();
        let names: Vec<String> = cols.iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, vec!["region_east", "region_south", "region_west"]);

        let row = |r: usize| -> Vec<f64> {
            cols.iter()
                .map(|c| c.f64().unwrap().get(r).unwrap())
                .collect()
        };
        assert_eq!(row(0), vec![0.0, 1.0, 0.0]);
        // missing imputes to the mode ("west")
        assert_eq!(row(1), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn unseen_category_encodes_as_all_zeros() {
        let t = CategoricalTransformer::fit(&train_frame(), &["region".to_string()]).unwrap();

        let test = df! {
            "region" => ["north"],
        }
        .unwrap();

        let cols = t.transform(&test).unwrap();
        assert_eq!(cols.len(), 3, "unseen values must not add columns");
        for col in &cols {
            assert_eq!(col.f64().unwrap().get(0).unwrap(), 0.0);
        }
    }

    #[test]
    fn numeric_coded_categories_encode_by_value() {
        let df = df! {
            "level" => [true, false, true],
        }
        .unwrap();

        let t = CategoricalTransformer::fit(&df, &["level".to_string()]).unwrap();
        let (_, vocab) = &t.vocabs()[0];
        assert_eq!(vocab.categories, vec!["false", "true"]);
        assert_eq!(t.encoded_width(), 2);
    }
}
