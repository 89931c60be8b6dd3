//! Multiset difference between two canonical group collections.
//!
//! Each canonical group (an internally sorted path list) acts as a single
//! composite key. Both sides are counted into key → multiplicity maps, and
//! the unmatched count for a key on each side is
//! `max(count_side - count_other, 0)`. Counting with multiplicity is what
//! makes pathological outputs behave: if the candidate reports the same
//! group twice and the reference once, exactly one copy is unmatched, where
//! naive set subtraction would report zero.

use std::collections::HashMap;

use serde::Serialize;

use crate::compare::{FileGroup, GroupCollection};

/// The outcome of comparing a candidate collection against a reference
/// collection.
///
/// Immutable once built; consumed by the report emitters. "Perfect match"
/// is exactly [`DifferenceReport::is_match`]: both difference lists empty.
/// Equal totals follow from that, so the totals are carried for reporting
/// only and never consulted for the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DifferenceReport {
    /// Groups the candidate produced that the reference did not, counted
    /// with multiplicity, in canonical order.
    pub only_in_candidate: Vec<FileGroup>,
    /// Groups the reference produced that the candidate did not, counted
    /// with multiplicity, in canonical order.
    pub only_in_reference: Vec<FileGroup>,
    /// Total group count of the candidate collection.
    pub candidate_total: usize,
    /// Total group count of the reference collection.
    pub reference_total: usize,
}

impl DifferenceReport {
    /// True iff the two collections were equal as multisets.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.only_in_candidate.is_empty() && self.only_in_reference.is_empty()
    }
}

/// Compare two canonical collections and report the asymmetric differences.
///
/// Performs no I/O and never fails; malformed inputs are rejected upstream
/// by the normalizers, so this is only ever called with two well-formed
/// canonical collections.
#[must_use]
pub fn diff(candidate: &GroupCollection, reference: &GroupCollection) -> DifferenceReport {
    let candidate_counts = count_groups(candidate);
    let reference_counts = count_groups(reference);

    let report = DifferenceReport {
        only_in_candidate: unmatched(candidate, &reference_counts),
        only_in_reference: unmatched(reference, &candidate_counts),
        candidate_total: candidate.len(),
        reference_total: reference.len(),
    };

    log::debug!(
        "diff: {} candidate group(s), {} reference group(s), {} + {} unmatched",
        report.candidate_total,
        report.reference_total,
        report.only_in_candidate.len(),
        report.only_in_reference.len()
    );
    report
}

/// Count each composite key's multiplicity in a collection.
fn count_groups(collection: &GroupCollection) -> HashMap<&FileGroup, usize> {
    let mut counts = HashMap::new();
    for group in collection {
        *counts.entry(group).or_insert(0) += 1;
    }
    counts
}

/// Emit the copies of each of `side`'s groups not covered by `other`'s
/// multiplicities. Walking `side` in canonical order keeps the output
/// deterministic.
fn unmatched(side: &GroupCollection, other: &HashMap<&FileGroup, usize>) -> Vec<FileGroup> {
    let mut available: HashMap<&FileGroup, usize> = other.clone();
    let mut out = Vec::new();

    for group in side {
        match available.get_mut(group) {
            Some(count) if *count > 0 => *count -= 1,
            _ => out.push(group.clone()),
        }
    }
    out
}
