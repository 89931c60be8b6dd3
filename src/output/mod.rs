//! Report emitters for comparison results.
//!
//! Both emitters render a finished [`DifferenceReport`] and nothing else:
//! they never re-derive or re-check equivalence. Text output is the
//! human-facing report; JSON output carries the same content for scripting.
//!
//! [`DifferenceReport`]: crate::compare::DifferenceReport

pub mod json;
pub mod text;

pub use json::JsonReport;
pub use text::TextReport;

/// Display names for the two sides, used in headings and labels.
///
/// The labels are presentation-only; using the original command strings
/// makes the report self-describing ("jdupes -z set size: 12").
#[derive(Debug, Clone)]
pub struct ReportLabels {
    /// Label for the tool under test.
    pub candidate: String,
    /// Label for the trusted tool.
    pub reference: String,
}

impl ReportLabels {
    /// Build labels from the two tools' display names.
    #[must_use]
    pub fn new(candidate: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            reference: reference.into(),
        }
    }
}
