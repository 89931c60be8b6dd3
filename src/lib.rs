//! dupediff - Differential Equivalence Tester for Duplicate File Finders
//!
//! Runs a trusted reference finder and a candidate finder over the same
//! subtree, normalizes both outputs into canonical collections of duplicate
//! groups, and reports the exact multiset difference between them. The
//! comparison core ([`compare`], [`normalize`]) is pure; all process
//! spawning lives in [`harness`].

pub mod cli;
pub mod compare;
pub mod error;
pub mod harness;
pub mod logging;
pub mod normalize;
pub mod output;

use anyhow::Result;

use crate::cli::{Cli, ReportFormat};
use crate::error::ExitCode;
use crate::harness::PipelinePlan;
use crate::output::{JsonReport, ReportLabels, TextReport};

/// Run the full comparison: both pipelines, the diff, and the report.
///
/// Returns the exit code for a completed comparison ([`ExitCode::Match`] or
/// [`ExitCode::Mismatch`]); pipeline failures propagate as errors and are
/// classified by the caller.
///
/// # Errors
///
/// Returns an error when either pipeline fails to produce a canonical
/// collection, or the report cannot be written.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);
    if cli.no_color {
        yansi::disable();
    }

    let plan = PipelinePlan {
        reference_prog: cli.reference_cmd.clone(),
        candidate_prog: cli.candidate_cmd.clone(),
        use_fd: cli.use_fd,
        find_options: cli.find_options.clone(),
        paths: cli.paths.clone(),
    };
    log::info!(
        "comparing `{}` against `{}` over {:?}",
        cli.candidate_cmd,
        cli.reference_cmd,
        cli.paths
    );

    // Reference first, then candidate, matching each pipeline's timer to
    // the tool it runs. The pipelines are independent; order is cosmetic.
    let reference = plan.run_reference()?;
    let candidate = plan.run_candidate()?;

    let report = compare::diff(&candidate, &reference);
    let labels = ReportLabels::new(&cli.candidate_cmd, &cli.reference_cmd);

    let stdout = std::io::stdout();
    match cli.output {
        ReportFormat::Text => TextReport::new(&report, &labels).write_to(&mut stdout.lock())?,
        ReportFormat::Json => {
            JsonReport::new(&report, &labels).write_to(&mut stdout.lock(), true)?;
        }
    }

    Ok(if report.is_match() {
        ExitCode::Match
    } else {
        ExitCode::Mismatch
    })
}
