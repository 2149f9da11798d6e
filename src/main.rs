//! Tabprep: Dataset Preparation CLI Tool
//!
//! A command-line tool that runs the leakage-free preparation pipeline on a
//! CSV dataset and reports the resulting train/test feature matrices.

mod cli;
mod datasets;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use pipeline::{load_csv, prepare_dataset};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_info, print_step_header, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = cli.input_path()?;
    let config = cli.prep_config()?;

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&input, &config.outcome_column, config.test_size, config.seed);

    // Step 1: Load dataset
    print_step_header(1, "Loading dataset");
    let start = Instant::now();
    let spinner = create_spinner("Reading CSV...");
    let df = load_csv(&input, cli.infer_schema_length)?;
    finish_with_success(
        &spinner,
        &format!("Loaded {} rows x {} columns", df.height(), df.width()),
    );
    print_info(&format!("Load took {:.2?}", start.elapsed()));

    // Step 2: Prepare train/test partitions
    print_step_header(2, "Preparing train/test partitions");
    let start = Instant::now();
    let prepared = prepare_dataset(df, &config)?;
    print_success(&format!(
        "Train: {} rows, Test: {} rows, {} encoded features",
        prepared.summary.train_rows, prepared.summary.test_rows, prepared.summary.encoded_width
    ));
    print_info(&format!("Preparation took {:.2?}", start.elapsed()));

    prepared.summary.display();

    if let Some(path) = &cli.summary_json {
        let json = prepared.summary.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write summary JSON: {}", path.display()))?;
        print_success(&format!("Summary written to {}", path.display()));
    }

    print_completion();
    Ok(())
}
