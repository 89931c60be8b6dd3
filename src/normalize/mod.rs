//! Normalizers for the raw outputs of the two tools.
//!
//! Each tool's output arrives as a raw byte blob with a declared format tag
//! and leaves as a plain sequence of [`FileGroup`]s, ready for
//! canonicalization. Two grammars are understood:
//!
//! - [`OutputFormat::LineBlocks`] - blank-line-separated blocks of paths,
//!   one per line, the `fdupes`/`jdupes` house format.
//! - [`OutputFormat::StructuredList`] - a JSON array of records, each with a
//!   `file_list` array of path strings.
//!
//! Normalization is a pure transformation: no I/O, no retries. Input that
//! violates its declared grammar is a contract violation by the producing
//! tool and surfaces as [`NormalizeError`] naming the side.

pub mod blocks;
pub mod structured;

use std::fmt;

use crate::compare::FileGroup;

/// Declared grammar of a tool's raw output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Groups separated by a blank line, one path per non-blank line.
    LineBlocks,
    /// JSON array of records carrying `file_list` path arrays.
    StructuredList,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::LineBlocks => write!(f, "line-delimited-blocks"),
            OutputFormat::StructuredList => write!(f, "structured-list"),
        }
    }
}

/// Which tool produced a piece of output. Carried on every normalization
/// error so failures are attributed to the right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The tool under test.
    Candidate,
    /// The trusted tool treated as ground truth.
    Reference,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Candidate => write!(f, "candidate"),
            Side::Reference => write!(f, "reference"),
        }
    }
}

/// A raw output blob paired with its declared format.
#[derive(Debug, Clone, Copy)]
pub struct RawOutput<'a> {
    /// The captured bytes of the tool's stdout.
    pub bytes: &'a [u8],
    /// The grammar the bytes claim to follow.
    pub format: OutputFormat,
}

impl<'a> RawOutput<'a> {
    /// Pair a blob with its format tag.
    #[must_use]
    pub fn new(bytes: &'a [u8], format: OutputFormat) -> Self {
        Self { bytes, format }
    }
}

/// A declared-format input failed its grammar.
///
/// Not retried: the producing tool broke its output contract, which is a
/// different class of outcome from a legitimate mismatch and is reported as
/// such.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The blob is not valid UTF-8 text, so the line grammar cannot apply.
    #[error("{side} output is not valid UTF-8: {source}")]
    InvalidEncoding {
        /// Which tool produced the bytes.
        side: Side,
        /// The underlying decode error.
        #[source]
        source: std::str::Utf8Error,
    },

    /// The blob does not parse as the declared structured schema.
    #[error("{side} output is not a well-formed record list: {source}")]
    MalformedRecords {
        /// Which tool produced the bytes.
        side: Side,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl NormalizeError {
    /// Which side produced the malformed output.
    #[must_use]
    pub fn side(&self) -> Side {
        match self {
            NormalizeError::InvalidEncoding { side, .. }
            | NormalizeError::MalformedRecords { side, .. } => *side,
        }
    }
}

/// Normalize one tool's raw output into a sequence of groups.
///
/// Dispatches on the declared format tag. An empty output is not an error;
/// it normalizes to zero groups, meaning the tool found no duplicates.
///
/// # Errors
///
/// Returns [`NormalizeError`] when the blob violates its declared grammar.
pub fn normalize(raw: RawOutput<'_>, side: Side) -> Result<Vec<FileGroup>, NormalizeError> {
    let groups = match raw.format {
        OutputFormat::LineBlocks => blocks::parse(raw.bytes, side)?,
        OutputFormat::StructuredList => structured::parse(raw.bytes, side)?,
    };
    log::debug!("{side}: normalized {} group(s) from {} output", groups.len(), raw.format);
    Ok(groups)
}
