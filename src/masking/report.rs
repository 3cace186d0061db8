//! Detection and masking reports
//!
//! [`DetectionReport`] describes how each header was classified without
//! touching any values. [`MaskingOutcome`] carries the masked record and run
//! metadata, and [`MaskingSummary`] condenses it for the console.

use crate::domain::Record;
use crate::masking::models::{Classification, MatchMethod, PiiCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

const RULE: &str = "───────────────────────────────────────────────────────────────\n";
const BANNER: &str = "═══════════════════════════════════════════════════════════════\n";

/// Classification of every header in a table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// One entry per header, in table order
    pub columns: Vec<Classification>,
}

impl DetectionReport {
    pub fn new(columns: Vec<Classification>) -> Self {
        Self { columns }
    }

    /// Headers that classified as something other than Generic
    pub fn pii_columns(&self) -> impl Iterator<Item = &Classification> {
        self.columns.iter().filter(|c| !c.is_generic())
    }

    /// Column count per category
    pub fn counts_by_category(&self) -> BTreeMap<PiiCategory, usize> {
        let mut counts = BTreeMap::new();
        for column in &self.columns {
            *counts.entry(column.category).or_insert(0) += 1;
        }
        counts
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(BANNER);
        output.push_str("                  COLUMN DETECTION REPORT                      \n");
        output.push_str(BANNER);
        output.push('\n');

        output.push_str(&format!("  Columns analyzed:   {}\n", self.columns.len()));
        output.push_str(&format!("  PII columns found:  {}\n", self.pii_columns().count()));
        output.push('\n');

        if !self.columns.is_empty() {
            output.push_str("🔍 COLUMNS\n");
            output.push_str(RULE);
            for column in &self.columns {
                let detail = match (&column.matched_keyword, column.method) {
                    (Some(keyword), MatchMethod::Fuzzy) => {
                        format!("~\"{}\" ({})", keyword, column.score)
                    }
                    (Some(keyword), _) => format!("\"{}\"", keyword),
                    (None, _) => "-".to_string(),
                };
                output.push_str(&format!(
                    "  {:30} {:15} {}\n",
                    column.header,
                    column.category.label(),
                    detail
                ));
            }
            output.push('\n');
        }

        output.push_str(BANNER);
        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// What happened to one selected column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnResult {
    pub header: String,
    pub category: PiiCategory,
    /// Non-missing cells that went through a transform
    pub rows_masked: usize,
}

/// Result of one masking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingOutcome {
    /// Masked record, same shape as the input
    pub record: Record,
    /// Masked columns, in table order
    pub columns: Vec<ColumnResult>,
    /// Selected headers that are not in the table
    pub skipped: Vec<String>,
    pub run_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub processing_time_ms: u64,
}

impl MaskingOutcome {
    pub fn summary(&self) -> MaskingSummary {
        let mut by_category = BTreeMap::new();
        for column in &self.columns {
            *by_category.entry(column.category).or_insert(0) += 1;
        }

        MaskingSummary {
            run_id: self.run_id,
            total_rows: self.record.row_count(),
            total_columns: self.record.column_count(),
            columns_masked: self.columns.len(),
            cells_masked: self.columns.iter().map(|c| c.rows_masked).sum(),
            by_category,
            skipped: self.skipped.clone(),
            processing_time_ms: self.processing_time_ms,
        }
    }
}

/// Console-friendly digest of a [`MaskingOutcome`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingSummary {
    pub run_id: Uuid,
    pub total_rows: usize,
    pub total_columns: usize,
    pub columns_masked: usize,
    pub cells_masked: usize,
    pub by_category: BTreeMap<PiiCategory, usize>,
    pub skipped: Vec<String>,
    pub processing_time_ms: u64,
}

impl MaskingSummary {
    /// Format summary for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(BANNER);
        output.push_str("                      MASKING SUMMARY                          \n");
        output.push_str(BANNER);
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str(RULE);
        output.push_str(&format!("  Run ID:           {}\n", self.run_id));
        output.push_str(&format!("  Rows:             {}\n", self.total_rows));
        output.push_str(&format!("  Columns:          {}\n", self.total_columns));
        output.push_str(&format!("  Columns masked:   {}\n", self.columns_masked));
        output.push_str(&format!("  Cells masked:     {}\n", self.cells_masked));
        output.push_str(&format!("  Processing time:  {} ms\n", self.processing_time_ms));
        output.push('\n');

        if !self.by_category.is_empty() {
            output.push_str("🔍 COLUMNS BY CATEGORY\n");
            output.push_str(RULE);
            for (category, count) in &self.by_category {
                output.push_str(&format!("  {:30} {:>5}\n", category.label(), count));
            }
            output.push('\n');
        }

        if !self.skipped.is_empty() {
            output.push_str("⚠️  SKIPPED COLUMNS (not found)\n");
            output.push_str(RULE);
            for header in &self.skipped {
                output.push_str(&format!("  • {}\n", header));
            }
            output.push('\n');
        }

        output.push_str(BANNER);
        output
    }
}
