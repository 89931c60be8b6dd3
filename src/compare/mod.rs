//! The equivalence-checking core.
//!
//! # Overview
//!
//! Two tools have each produced a grouping of duplicate files; this module
//! decides whether the groupings agree, and if not, exactly which groups
//! disagree. The pipeline is normalize → canonicalize → multiset diff:
//!
//! 1. Each side's raw output becomes a sequence of [`FileGroup`]s
//!    (see [`crate::normalize`]).
//! 2. [`GroupCollection::canonicalize`] reduces the sequence to canonical
//!    form, making structural equality stand in for semantic equality.
//! 3. [`diff`] compares the two canonical collections as multisets and
//!    reports the asymmetric differences.
//!
//! The core is pure: no I/O, no processes, no environment. Running the
//! tools lives in [`crate::harness`].
//!
//! # Example
//!
//! ```
//! use dupediff::compare::{compare_raw, RawOutput};
//! use dupediff::normalize::OutputFormat;
//!
//! let reference = b"a\nb\n\nc\nd\n\n";
//! let candidate = br#"[{"file_list": ["b", "a"]}, {"file_list": ["d", "c"]}]"#;
//!
//! let report = compare_raw(
//!     RawOutput::new(candidate, OutputFormat::StructuredList),
//!     RawOutput::new(reference, OutputFormat::LineBlocks),
//! )
//! .unwrap();
//!
//! assert!(report.is_match());
//! ```

pub mod diff;
pub mod groups;

pub use diff::{diff, DifferenceReport};
pub use groups::{FileGroup, GroupCollection};

pub use crate::normalize::RawOutput;

use crate::normalize::{self, NormalizeError, Side};

/// Compare two raw tool outputs and report their differences.
///
/// This is the library's comparison entry point: two raw blobs with format
/// tags in, a [`DifferenceReport`] out. Both sides are normalized and
/// canonicalized independently; if either side's output is malformed, the
/// comparison never runs and the error names the offending side.
///
/// # Errors
///
/// Returns [`NormalizeError`] when either blob violates its declared
/// grammar.
pub fn compare_raw(
    candidate: RawOutput<'_>,
    reference: RawOutput<'_>,
) -> Result<DifferenceReport, NormalizeError> {
    let candidate_groups =
        GroupCollection::canonicalize(normalize::normalize(candidate, Side::Candidate)?);
    let reference_groups =
        GroupCollection::canonicalize(normalize::normalize(reference, Side::Reference)?);

    Ok(diff::diff(&candidate_groups, &reference_groups))
}
