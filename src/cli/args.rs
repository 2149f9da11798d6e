//! Command-line argument definitions using clap

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::datasets::{
    college_completion_config, job_placement_config, COLLEGE_DEFAULT_PATH, JOB_DEFAULT_PATH,
};
use crate::pipeline::PrepConfig;

/// Built-in dataset presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// College completion (outcome: grad_150_value)
    College,
    /// Job placement (outcome: salary)
    Job,
}

/// Tabprep - prepare tabular CSV data for binary classification
#[derive(Parser, Debug)]
#[command(name = "tabprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file path.
    /// Defaults to the preset's conventional file name when --preset is used.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Dataset preset supplying the outcome column and drop lists
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Outcome column to derive the label from (required without --preset)
    #[arg(short = 't', long)]
    pub outcome: Option<String>,

    /// Name for the derived 0/1 label column
    #[arg(long, default_value = "label")]
    pub label: String,

    /// Identifier/leakage columns to drop before processing (comma-separated).
    /// Columns not present in the file are ignored.
    #[arg(long, value_delimiter = ',')]
    pub drop_columns: Vec<String>,

    /// Case-insensitive column names to drop wherever they appear (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub drop_like: Vec<String>,

    /// Fraction of rows assigned to the test partition (exclusive 0..1)
    #[arg(long, default_value = "0.2")]
    pub test_size: f64,

    /// Random seed controlling the stratified split
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Outcome column name for the job preset
    #[arg(long, default_value = "salary")]
    pub salary_col: String,

    /// Number of rows to use for schema inference.
    /// Higher values improve type detection for ambiguous columns but may be slower.
    /// Use 0 for a full table scan (slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Write the preparation summary to this path as JSON
    #[arg(long)]
    pub summary_json: Option<PathBuf>,
}

impl Cli {
    /// Resolve the input path, falling back to the preset's default file name.
    pub fn input_path(&self) -> Result<PathBuf> {
        if let Some(input) = &self.input {
            return Ok(input.clone());
        }
        match self.preset {
            Some(Preset::College) => Ok(PathBuf::from(COLLEGE_DEFAULT_PATH)),
            Some(Preset::Job) => Ok(PathBuf::from(JOB_DEFAULT_PATH)),
            None => anyhow::bail!("Input file is required. Use -i/--input to specify a CSV file."),
        }
    }

    /// Build the preparation config from the preset or the explicit flags.
    pub fn prep_config(&self) -> Result<PrepConfig> {
        let config = match self.preset {
            Some(Preset::College) => college_completion_config(),
            Some(Preset::Job) => job_placement_config(&self.salary_col),
            None => {
                let outcome = self.outcome.as_deref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "Outcome column is required without --preset. Use -t/--outcome to specify."
                    )
                })?;
                PrepConfig::new(outcome, &self.label)
                    .with_drop_columns(self.drop_columns.clone())
                    .with_drop_name_matches(self.drop_like.clone())
            }
        };

        Ok(config.with_test_size(self.test_size).with_seed(self.seed))
    }
}
