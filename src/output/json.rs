//! JSON report rendering for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "candidate": {"label": "undupes", "total_groups": 12},
//!   "reference": {"label": "jdupes -z", "total_groups": 12},
//!   "only_in_candidate": [["/a/1", "/a/2"]],
//!   "only_in_reference": [],
//!   "match": false
//! }
//! ```
//!
//! The difference lists serialize each group as its sorted path array, in
//! canonical order, exactly as the comparison produced them.

use std::io::Write;

use serde::Serialize;

use crate::compare::{DifferenceReport, FileGroup};
use crate::output::ReportLabels;

/// One side's summary in JSON form.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSideSummary {
    /// Display label for the side (its command string).
    pub label: String,
    /// Total canonical group count for the side.
    pub total_groups: usize,
}

/// Complete JSON report structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// The tool under test.
    pub candidate: JsonSideSummary,
    /// The trusted tool.
    pub reference: JsonSideSummary,
    /// Groups only the candidate produced.
    pub only_in_candidate: Vec<FileGroup>,
    /// Groups only the reference produced.
    pub only_in_reference: Vec<FileGroup>,
    /// Whether the two collections were equal as multisets.
    #[serde(rename = "match")]
    pub is_match: bool,
}

impl JsonReport {
    /// Build the JSON form of a difference report.
    #[must_use]
    pub fn new(report: &DifferenceReport, labels: &ReportLabels) -> Self {
        Self {
            candidate: JsonSideSummary {
                label: labels.candidate.clone(),
                total_groups: report.candidate_total,
            },
            reference: JsonSideSummary {
                label: labels.reference.clone(),
                total_groups: report.reference_total,
            },
            only_in_candidate: report.only_in_candidate.clone(),
            only_in_reference: report.only_in_reference.clone(),
            is_match: report.is_match(),
        }
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write JSON to a writer, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<(), JsonReportError> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Errors that can occur during JSON report output.
#[derive(thiserror::Error, Debug)]
pub enum JsonReportError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON report output: {0}")]
    Io(#[from] std::io::Error),
}
