//! Parser for the blank-line-separated group format.
//!
//! This is the format `fdupes` and `jdupes` print: each group of mutual
//! duplicates is a run of lines, one path per line, and groups are separated
//! by a blank line. The grammar has no escaping, so a path containing a
//! newline cannot be represented; that limitation is inherited from the
//! tools themselves and deliberately not papered over here.

use crate::compare::FileGroup;
use crate::normalize::{NormalizeError, Side};

/// Parse blank-line-separated path blocks into groups.
///
/// Blocks that are empty or all-whitespace contribute no group, so leading
/// or trailing blank runs in the output are harmless. Within a block, blank
/// lines are skipped and every other line is taken verbatim as one path.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidEncoding`] when the bytes are not valid
/// UTF-8; the line grammar is defined over text.
pub fn parse(bytes: &[u8], side: Side) -> Result<Vec<FileGroup>, NormalizeError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|source| NormalizeError::InvalidEncoding { side, source })?;

    let groups = text
        .split("\n\n")
        .filter_map(parse_block)
        .collect();
    Ok(groups)
}

/// Parse one block into a group, or `None` if the block is all whitespace.
fn parse_block(block: &str) -> Option<FileGroup> {
    let paths: Vec<String> = block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect();

    if paths.is_empty() {
        None
    } else {
        Some(FileGroup::new(paths))
    }
}
