//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the dupediff application.
///
/// A mismatch is a legitimate comparison *result*; a failure is an inability
/// to compare at all. The two are kept apart in the exit status so scripts
/// never confuse "the tools disagree" with "the comparison broke":
/// - 0: Perfect match (both tools produced the same grouping)
/// - 1: General error (unexpected failure)
/// - 2: Mismatch (comparison completed, the groupings differ)
/// - 3: Malformed output (a tool violated its output contract)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Match: Both tools produced the same grouping.
    Match = 0,
    /// General error: An unexpected error occurred.
    GeneralError = 1,
    /// Mismatch: Comparison completed and the groupings differ.
    Mismatch = 2,
    /// Malformed output: A tool's output failed its declared grammar.
    MalformedOutput = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Match => "DD000",
            Self::GeneralError => "DD001",
            Self::Mismatch => "DD002",
            Self::MalformedOutput => "DD003",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "DD001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
    /// Which side failed, when the failure is attributable to one tool
    pub side: Option<String>,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode, side: Option<String>) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: format!("{err:#}"),
            side,
        }
    }
}
