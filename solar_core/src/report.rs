//! # Report Document
//!
//! Builds the sizing report as an ordered sequence of label/value rows,
//! identical in content to the on-screen summary. The generation timestamp
//! is supplied by the caller, never read here, so the same inputs always
//! produce byte-identical output.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use solar_core::report::SizingReport;
//! use solar_core::sizing::{compute, SizingInput};
//!
//! let input = SizingInput::default();
//! let result = compute(&input).unwrap();
//! let generated_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
//!
//! let report = SizingReport::new(&input, &result, generated_at);
//! println!("{}", report.to_text());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::{format_kw, format_money};
use crate::sizing::{SizingInput, SizingResult};

/// Title printed at the top of every report
pub const REPORT_TITLE: &str = "Solar Sizing Report";

/// Suggested filename for the downloadable document
pub const REPORT_FILENAME: &str = "solar_sizing_report.pdf";

/// A single label/value row of the report body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

impl ReportRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        ReportRow {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// A fully-built sizing report: title, ordered rows, generation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingReport {
    pub rows: Vec<ReportRow>,
    pub generated_at: DateTime<Utc>,
}

impl SizingReport {
    /// Build the report rows from a computed result and its input.
    ///
    /// Row order and formatting are fixed; values come from the same
    /// [`crate::format`] helpers the display surface uses.
    pub fn new(input: &SizingInput, result: &SizingResult, generated_at: DateTime<Utc>) -> Self {
        let rows = vec![
            ReportRow::new("Daily Load (kWh)", format!("{:.1}", input.daily_load_kwh)),
            ReportRow::new("Sun Hours", format!("{:.1}", input.sun_hours)),
            ReportRow::new("Panel Capacity (kW)", format_kw(result.panel_array_kw)),
            ReportRow::new("Number of Panels", result.panel_count.to_string()),
            ReportRow::new("Panel Wattage (W)", input.panel_wattage.to_string()),
            ReportRow::new("Battery Capacity (Ah)", result.battery_capacity_ah.to_string()),
            ReportRow::new("Battery Voltage (V)", input.battery_voltage.to_string()),
            ReportRow::new("Battery Type", input.battery_type.display_name()),
            ReportRow::new("Inverter Size (kW)", format_kw(result.inverter_kw)),
            ReportRow::new("Panel Cost (Rs.)", format_money(result.panel_cost)),
            ReportRow::new("Battery Cost (Rs.)", format_money(result.battery_cost)),
            ReportRow::new("Total System Cost (Rs.)", format_money(result.total_cost)),
        ];

        SizingReport { rows, generated_at }
    }

    /// Footer line carrying the generation timestamp.
    pub fn footer(&self) -> String {
        format!(
            "Generated on {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )
    }

    /// Render the plain-text body: title header, aligned rows, timestamp
    /// footer. Deterministic for a given input and timestamp.
    pub fn to_text(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|row| row.label.len())
            .max()
            .unwrap_or(0);

        let mut text = String::new();
        text.push_str(REPORT_TITLE);
        text.push('\n');
        text.push_str(&"=".repeat(REPORT_TITLE.len()));
        text.push_str("\n\n");
        for row in &self.rows {
            text.push_str(&format!("{:<width$}  {}\n", row.label, row.value));
        }
        text.push('\n');
        text.push_str(&self.footer());
        text.push('\n');
        text
    }
}
