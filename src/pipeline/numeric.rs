//! Numeric feature transformer
//!
//! Two-step treatment of numeric columns: impute missing values with the
//! training median, then standardize with the training mean and standard
//! deviation. Fitting and applying are separate so test rows never influence
//! the parameters.

use anyhow::{Context, Result};
use polars::prelude::*;

/// Per-column statistics captured during `fit`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericStats {
    /// Training median, used to fill missing values
    pub median: f64,
    /// Mean of the imputed training column
    pub mean: f64,
    /// Population standard deviation of the imputed training column
    pub std: f64,
}

/// Imputes and standardizes a fixed set of numeric columns.
#[derive(Debug, Clone)]
pub struct NumericTransformer {
    columns: Vec<(String, NumericStats)>,
}

impl NumericTransformer {
    /// Fit imputation and scaling parameters on the training partition.
    ///
    /// The mean and standard deviation are computed after imputation, so they
    /// describe exactly the values the scaler will see at transform time.
    pub fn fit(df: &DataFrame, columns: &[String]) -> Result<Self> {
        let mut fitted = Vec::with_capacity(columns.len());

        for name in columns {
            let col = df
                .column(name)
                .with_context(|| format!("Numeric column '{}' not found during fit", name))?;
            let col = col.cast(&DataType::Float64)?;
            let values = col.f64()?;

            let median = values.median().with_context(|| {
                format!("Numeric column '{}' has no non-missing training values", name)
            })?;

            let imputed: Vec<f64> = values.into_iter().map(|v| v.unwrap_or(median)).collect();
            let n = imputed.len() as f64;
            let mean = imputed.iter().sum::<f64>() / n;
            let variance = imputed.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

            fitted.push((
                name.clone(),
                NumericStats {
                    median,
                    mean,
                    std: variance.sqrt(),
                },
            ));
        }

        Ok(Self { columns: fitted })
    }

    /// Apply the fitted parameters to any partition.
    ///
    /// Missing values are replaced with the fit-time median, then every value
    /// is scaled to `(value - mean) / std`. A column that was constant during
    /// fitting has `std == 0`; its scale factor is 1, so it transforms to all
    /// zeros instead of dividing by zero.
    pub fn transform(&self, df: &DataFrame) -> Result<Vec<Column>> {
        self.columns
            .iter()
            .map(|(name, stats)| {
                let col = df
                    .column(name)
                    .with_context(|| format!("Numeric column '{}' missing at transform time", name))?;
                let col = col.cast(&DataType::Float64)?;
                let values = col.f64()?;

                let scale = if stats.std == 0.0 { 1.0 } else { stats.std };
                let scaled: Vec<f64> = values
                    .into_iter()
                    .map(|v| (v.unwrap_or(stats.median) - stats.mean) / scale)
                    .collect();

                Ok(Column::new(name.as_str().into(), scaled))
            })
            .collect()
    }

    /// Fitted statistics in column order.
    pub fn stats(&self) -> &[(String, NumericStats)] {
        &self.columns
    }
}
