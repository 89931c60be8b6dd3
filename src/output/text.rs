//! Human-readable report rendering.
//!
//! The report leads with each side's total group count, dumps each
//! non-empty difference list under a heading naming the side that *lacks*
//! those groups, and closes with the unambiguous `Perfect Match!` marker
//! when there is nothing to dump.

use std::io::Write;

use yansi::Paint;

use crate::compare::{DifferenceReport, FileGroup};
use crate::output::ReportLabels;

/// Text renderer for a [`DifferenceReport`].
#[derive(Debug)]
pub struct TextReport<'a> {
    report: &'a DifferenceReport,
    labels: &'a ReportLabels,
}

impl<'a> TextReport<'a> {
    /// Pair a report with the side labels to render it under.
    #[must_use]
    pub fn new(report: &'a DifferenceReport, labels: &'a ReportLabels) -> Self {
        Self { report, labels }
    }

    /// Render the report to a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{} set size: {}\n",
            self.labels.reference, self.report.reference_total
        ));
        out.push_str(&format!(
            "{} set size: {}\n",
            self.labels.candidate, self.report.candidate_total
        ));

        // Groups the candidate produced are missing from the reference's
        // output, and vice versa; each dump is titled after the side that
        // lacks the groups.
        if !self.report.only_in_candidate.is_empty() {
            out.push_str(&format!(
                "{}\n",
                format!("Not in {}:", self.labels.reference).red()
            ));
            render_groups(&mut out, &self.report.only_in_candidate);
        }
        if !self.report.only_in_reference.is_empty() {
            out.push_str(&format!(
                "{}\n",
                format!("Not in {}:", self.labels.candidate).red()
            ));
            render_groups(&mut out, &self.report.only_in_reference);
        }

        if self.report.is_match() {
            out.push_str(&format!("{}\n", "Perfect Match!".green().bold()));
        }
        out
    }

    /// Write the rendered report to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.render().as_bytes())
    }
}

fn render_groups(out: &mut String, groups: &[FileGroup]) {
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for path in group.paths() {
            out.push_str("  ");
            out.push_str(path);
            out.push('\n');
        }
    }
}
