//! End-to-end dataset preparation
//!
//! Glues the pipeline stages together: derive the label, remove leakage
//! columns, route columns by type, split rows, then fit the transformers on
//! the training partition and apply them to both partitions. The same
//! procedure serves every dataset; presets only differ in configuration.

use anyhow::{Context, Result};
use polars::prelude::*;

use super::categorical::CategoricalTransformer;
use super::leakage::{drop_leakage_columns, DropSpec};
use super::numeric::NumericTransformer;
use super::router::classify_columns;
use super::split::stratified_split;
use super::target::derive_binary_target;
use crate::report::PrepSummary;

/// Configuration for one preparation run.
///
/// All parameters are explicit; there is no hidden global state. The
/// defaults (`test_size` 0.2, `seed` 42) match the source pipelines.
#[derive(Debug, Clone)]
pub struct PrepConfig {
    /// Numeric column the label is derived from
    pub outcome_column: String,
    /// Name given to the derived 0/1 label column
    pub label_column: String,
    /// Identifier and leakage columns to remove (best-effort)
    pub drop: DropSpec,
    /// Fraction of rows assigned to the test partition, in (0, 1)
    pub test_size: f64,
    /// Seed controlling split determinism
    pub seed: u64,
}

impl PrepConfig {
    pub fn new(outcome_column: &str, label_column: &str) -> Self {
        Self {
            outcome_column: outcome_column.to_string(),
            label_column: label_column.to_string(),
            drop: DropSpec::default(),
            test_size: 0.2,
            seed: 42,
        }
    }

    pub fn with_drop_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drop.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_drop_name_matches<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drop.name_matches = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_test_size(mut self, test_size: f64) -> Self {
        self.test_size = test_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Output of one preparation run.
///
/// Feature matrices are all-numeric frames whose columns are the
/// standardized numeric features followed by the one-hot indicator columns,
/// in fit-time order. Label vectors are row-aligned with their matrices.
/// Fitted transformer state is discarded when this is returned; nothing is
/// shared across runs.
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub train_features: DataFrame,
    pub test_features: DataFrame,
    pub train_labels: Vec<i32>,
    pub test_labels: Vec<i32>,
    pub summary: PrepSummary,
}

/// Run the full preparation pipeline on an in-memory dataset.
///
/// Transformer parameters are fit strictly on the training partition and
/// applied to the test partition without refitting, so no test-row statistic
/// reaches the training parameters. The label cutoff is the one exception by
/// construction: it is the median of the whole dataset (see
/// [`derive_binary_target`]).
pub fn prepare_dataset(df: DataFrame, config: &PrepConfig) -> Result<PreparedData> {
    let rows_loaded = df.height();

    let (df, cutoff) =
        derive_binary_target(df, &config.outcome_column, &config.label_column)?;

    // The outcome column mechanically determines the label, so it is always
    // part of the drop set even when the configuration omits it.
    let mut drop = config.drop.clone();
    if !drop.columns.contains(&config.outcome_column) {
        drop.columns.push(config.outcome_column.clone());
    }
    let (df, dropped_columns) = drop_leakage_columns(df, &drop);

    let labels: Vec<i32> = df
        .column(&config.label_column)?
        .i32()?
        .into_iter()
        .flatten()
        .collect();
    let features = df
        .drop(&config.label_column)
        .context("Label column vanished before feature separation")?;

    let roles = classify_columns(&features);

    let split = stratified_split(&labels, config.test_size, config.seed)?;
    let train_df = features.take(&IdxCa::from_vec("idx".into(), split.train.clone()))?;
    let test_df = features.take(&IdxCa::from_vec("idx".into(), split.test.clone()))?;

    let numeric = NumericTransformer::fit(&train_df, &roles.numeric)?;
    let categorical = CategoricalTransformer::fit(&train_df, &roles.categorical)?;

    let encode = |partition: &DataFrame| -> Result<DataFrame> {
        let mut columns = numeric.transform(partition)?;
        columns.extend(categorical.transform(partition)?);
        Ok(DataFrame::new(columns)?)
    };
    let train_features = encode(&train_df)?;
    let test_features = encode(&test_df)?;

    let train_labels: Vec<i32> = split.train.iter().map(|&r| labels[r as usize]).collect();
    let test_labels: Vec<i32> = split.test.iter().map(|&r| labels[r as usize]).collect();

    let positives = labels.iter().filter(|&&l| l == 1).count();
    let summary = PrepSummary {
        rows_loaded,
        rows_labeled: labels.len(),
        rows_dropped: cutoff.rows_dropped,
        outcome_column: cutoff.column,
        cutoff: cutoff.cutoff,
        prevalence: positives as f64 / labels.len() as f64,
        dropped_columns,
        numeric_features: roles.numeric.len(),
        categorical_features: roles.categorical.len(),
        encoded_width: train_features.width(),
        train_rows: train_features.height(),
        test_rows: test_features.height(),
        test_size: config.test_size,
        seed: config.seed,
    };

    Ok(PreparedData {
        train_features,
        test_features,
        train_labels,
        test_labels,
        summary,
    })
}
