//! Tabprep: Dataset Preparation Library
//!
//! A library for preparing tabular datasets for binary classification:
//! median-split target derivation, leakage column removal, train-only
//! imputation/scaling/one-hot encoding, and stratified train/test splitting.

pub mod cli;
pub mod datasets;
pub mod pipeline;
pub mod report;
pub mod utils;
