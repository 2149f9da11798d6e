//! Preparation summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

/// Summary of one preparation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PrepSummary {
    /// Rows in the file as loaded
    pub rows_loaded: usize,
    /// Rows that received a label
    pub rows_labeled: usize,
    /// Rows dropped for a missing/unparseable outcome
    pub rows_dropped: usize,
    /// Column the label was derived from
    pub outcome_column: String,
    /// Median cutoff used to binarize the outcome
    pub cutoff: f64,
    /// Share of rows labeled 1
    pub prevalence: f64,
    /// Identifier/leakage columns removed
    pub dropped_columns: Vec<String>,
    /// Feature columns routed as numeric
    pub numeric_features: usize,
    /// Feature columns routed as categorical
    pub categorical_features: usize,
    /// Columns in the encoded output matrices
    pub encoded_width: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub test_size: f64,
    pub seed: u64,
}

impl PrepSummary {
    /// Serialize the summary to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("PREPARATION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Rows loaded"),
            Cell::new(self.rows_loaded),
        ]);
        table.add_row(vec![
            Cell::new("🏷️  Rows labeled"),
            Cell::new(self.rows_labeled),
        ]);
        table.add_row(vec![
            Cell::new("🗑️  Rows without outcome"),
            Cell::new(self.rows_dropped).fg(if self.rows_dropped == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
        table.add_row(vec![
            Cell::new(format!("🎯 Median cutoff ({})", self.outcome_column)),
            Cell::new(format!("{:.4}", self.cutoff)),
        ]);
        table.add_row(vec![
            Cell::new("⚖️  Prevalence (label=1)"),
            Cell::new(format!("{:.1}%", self.prevalence * 100.0)),
        ]);
        table.add_row(vec![
            Cell::new("🔢 Numeric features"),
            Cell::new(self.numeric_features),
        ]);
        table.add_row(vec![
            Cell::new("🔤 Categorical features"),
            Cell::new(self.categorical_features),
        ]);
        table.add_row(vec![
            Cell::new("📐 Encoded width"),
            Cell::new(self.encoded_width)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("🚂 Train rows"),
            Cell::new(self.train_rows),
        ]);
        table.add_row(vec![
            Cell::new("🧪 Test rows"),
            Cell::new(self.test_rows),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.dropped_columns.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("DROPPED COLUMNS").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            println!();
            println!(
                "      {} {}:",
                style("Identifiers / leakage").yellow(),
                style(format!("({})", self.dropped_columns.len())).dim()
            );
            for column in &self.dropped_columns {
                println!("        {} {}", style("•").dim(), column);
            }
        }
    }
}
