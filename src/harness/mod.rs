//! The invocation layer: runs both tools and hands their outputs to the
//! comparison core.
//!
//! # Overview
//!
//! Two independent pipelines, each normalizing into a canonical
//! [`GroupCollection`]:
//!
//! - **Reference pipeline** - runs the trusted finder directly over the
//!   scan paths (`jdupes -z -H -r PATH` by default) and parses its
//!   blank-line-separated output.
//! - **Candidate pipeline** - runs a file enumerator (`find`, or `fd` with
//!   [`PipelinePlan::use_fd`]) to produce a NUL-delimited file list, pipes
//!   that into the tool under test's stdin, and parses the tool's JSON
//!   output.
//!
//! The pipelines share no state and run sequentially; each is wrapped in a
//! [`PipelineTimer`] so its wall-clock time is logged whether it succeeds
//! or fails. All configuration arrives as explicit parameters; nothing here
//! reads the environment or mutates process-wide state.

pub mod invoke;
pub mod timing;

pub use invoke::{InvokeError, ToolCommand};
pub use timing::PipelineTimer;

use crate::compare::GroupCollection;
use crate::normalize::{self, NormalizeError, OutputFormat, RawOutput, Side};

/// A pipeline run failed before producing a canonical collection.
///
/// Invocation failures (the tool could not run) and normalization failures
/// (the tool ran but broke its output contract) are distinct classes; both
/// name the side, and neither reaches the equivalence checker.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// An external command failed to run to a successful exit.
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    /// A tool's captured output violated its declared grammar.
    #[error(transparent)]
    Malformed(#[from] NormalizeError),
}

impl PipelineError {
    /// Which side's pipeline failed.
    #[must_use]
    pub fn side(&self) -> Side {
        match self {
            PipelineError::Invoke(err) => err.side(),
            PipelineError::Malformed(err) => err.side(),
        }
    }
}

/// Everything needed to run both pipelines, built once from the CLI.
#[derive(Debug, Clone)]
pub struct PipelinePlan {
    /// Reference finder command template, e.g. `jdupes -z`.
    pub reference_prog: String,
    /// Candidate command; receives the NUL-delimited file list on stdin.
    pub candidate_prog: String,
    /// Enumerate with `fd` instead of `find`.
    pub use_fd: bool,
    /// Extra options spliced into the `find` command line.
    pub find_options: String,
    /// Paths to scan.
    pub paths: Vec<String>,
}

impl PipelinePlan {
    /// The full reference command line: `<prog> -H -r <paths>`.
    ///
    /// `-H` hashes hard links like ordinary files and `-r` recurses; both
    /// `fdupes` and `jdupes` understand them.
    #[must_use]
    pub fn reference_command(&self) -> String {
        format!("{} -H -r {}", self.reference_prog, self.paths.join(" "))
    }

    /// The enumerator command line producing a NUL-delimited file list.
    #[must_use]
    pub fn enumerator_command(&self) -> String {
        let paths = self.paths.join(" ");
        if self.use_fd {
            format!("fd -u . --type f --print0 {paths}")
        } else if self.find_options.is_empty() {
            format!("find {paths} -type f -print0")
        } else {
            format!("find {paths} -type f {} -print0", self.find_options)
        }
    }

    /// Run the reference pipeline to a canonical collection.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if the finder fails to run or its output
    /// is malformed.
    pub fn run_reference(&self) -> Result<GroupCollection, PipelineError> {
        let _timer = PipelineTimer::start(&self.reference_prog);

        let command = ToolCommand::new(Side::Reference, self.reference_command());
        let stdout = command.run()?;
        let groups = normalize::normalize(
            RawOutput::new(&stdout, OutputFormat::LineBlocks),
            Side::Reference,
        )?;
        Ok(GroupCollection::canonicalize(groups))
    }

    /// Run the candidate pipeline to a canonical collection.
    ///
    /// The enumerator runs to completion first; its full output is then fed
    /// to the candidate's stdin.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if the enumerator or the candidate fails
    /// to run, or the candidate's output is malformed.
    pub fn run_candidate(&self) -> Result<GroupCollection, PipelineError> {
        let _timer = PipelineTimer::start(&self.candidate_prog);

        let enumerator = ToolCommand::new(Side::Candidate, self.enumerator_command());
        let file_list = enumerator.run()?;
        log::debug!("enumerator produced {} byte(s) of file list", file_list.len());

        let candidate = ToolCommand::new(Side::Candidate, self.candidate_prog.clone());
        let stdout = candidate.run_with_input(&file_list)?;
        let groups = normalize::normalize(
            RawOutput::new(&stdout, OutputFormat::StructuredList),
            Side::Candidate,
        )?;
        Ok(GroupCollection::canonicalize(groups))
    }
}
