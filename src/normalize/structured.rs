//! Parser for the structured-list (JSON) output format.
//!
//! The tool under test emits a top-level JSON array; each element is a
//! record whose `file_list` field names the paths of one duplicate group.
//! Records may carry any other fields, which are ignored. A record whose
//! list is empty, `null`, or absent contributes no group.
//!
//! # Accepted shapes
//!
//! ```json
//! [
//!   {"file_list": ["/a/1", "/a/2"], "size": 512},
//!   {"file_list": []}
//! ]
//! ```
//!
//! normalizes to a single group of two paths. An entirely empty output and
//! a top-level `null` both normalize to zero groups: "no duplicates" is a
//! valid result, not a failure.

use serde::Deserialize;

use crate::compare::FileGroup;
use crate::normalize::{NormalizeError, Side};

/// One record of the candidate tool's output. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct DupeRecord {
    /// Paths of one duplicate group. Absent and `null` are equivalent to
    /// empty.
    #[serde(default)]
    file_list: Option<Vec<String>>,
}

/// Parse a structured-list blob into groups.
///
/// # Errors
///
/// Returns [`NormalizeError::MalformedRecords`] when the blob violates the
/// structural grammar: top level is neither an array nor `null`, a record is
/// not an object, or a present `file_list` is not an array of strings.
pub fn parse(bytes: &[u8], side: Side) -> Result<Vec<FileGroup>, NormalizeError> {
    // Tools that found nothing may emit nothing at all.
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let records: Option<Vec<DupeRecord>> = serde_json::from_slice(bytes)
        .map_err(|source| NormalizeError::MalformedRecords { side, source })?;

    let groups = records
        .unwrap_or_default()
        .into_iter()
        .filter_map(|record| {
            let paths = record.file_list.unwrap_or_default();
            if paths.is_empty() {
                None
            } else {
                Some(FileGroup::new(paths))
            }
        })
        .collect();
    Ok(groups)
}
