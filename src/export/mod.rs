// src/export/mod.rs
// ============================================================================
// REPORT EXPORT
// ============================================================================
// Tabular exports built from a config snapshot:
// 1. Allocation report (one row per allocation plus project details)
// 2. Questionnaire answers (see `questionnaire`)
//
// A `Sheet` carries its header styling as data; spreadsheet writers apply it,
// CSV rendering ignores it.
// ============================================================================

use crate::params::REPORT_HEADER_FILL_RGB;
use crate::{Result, TokenomicsConfig};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

pub use questionnaire::{Question, Questionnaire, QuestionnaireError, QUESTIONS};

pub mod questionnaire;

pub const ALLOCATION_COLUMNS: [&str; 6] = [
    "Category",
    "Percentage",
    "Cliff (months)",
    "Vesting Duration (months)",
    "Vesting Type",
    "Token Amount",
];

/// Styling applied to the first row of a sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderStyle {
    pub bold: bool,
    /// RGB hex fill, e.g. "4F46E5"
    pub fill_rgb: String,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            bold: true,
            fill_rgb: REPORT_HEADER_FILL_RGB.to_string(),
        }
    }
}

/// A named grid of text cells; row 0 is the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    pub name: String,
    pub header_style: HeaderStyle,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, header: &[&str]) -> Self {
        Self {
            name: name.into(),
            header_style: HeaderStyle::default(),
            rows: vec![header.iter().map(|h| h.to_string()).collect()],
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// CSV text; fields are quoted only when they need to be
    pub fn to_csv(&self) -> String {
        self.render_csv(false)
    }

    /// CSV text with every field quoted
    pub fn to_csv_quoted(&self) -> String {
        self.render_csv(true)
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_csv())?;
        info!(sheet = %self.name, path = %path.display(), rows = self.rows.len(), "report exported");
        Ok(())
    }

    fn render_csv(&self, quote_all: bool) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(|f| csv_field(f, quote_all)).collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }
        out
    }
}

/// Quote a CSV field, doubling embedded quotes
pub fn csv_field(value: &str, force_quotes: bool) -> String {
    let needs_quotes = force_quotes || value.contains([',', '"', '\n', '\r']);
    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Allocation table followed by the project details section
pub fn allocation_report(config: &TokenomicsConfig) -> Sheet {
    let mut sheet = Sheet::new("Tokenomics", &ALLOCATION_COLUMNS);

    for (allocation, amount) in config.allocations.iter().zip(config.token_amounts()) {
        sheet.push_row(vec![
            allocation.category.clone(),
            allocation.percentage.to_string(),
            allocation.vesting.cliff_months.to_string(),
            allocation.vesting.duration_months.to_string(),
            allocation.vesting.kind.to_string(),
            amount.to_string(),
        ]);
    }

    sheet.push_row(Vec::new());
    sheet.push_row(vec!["Project Details".to_string()]);
    sheet.push_row(vec!["Total Supply".to_string(), config.total_supply.to_string()]);
    sheet.push_row(vec![
        "Market Condition".to_string(),
        config.market_condition.to_string(),
    ]);

    sheet
}
