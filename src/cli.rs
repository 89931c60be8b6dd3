//! Command-line interface definitions for dupediff.
//!
//! All knobs are explicit arguments; the environment fallbacks
//! (`PROG_NAME`, `UNDUPES`, `FIND_OPTIONS`) exist so the tool drops into
//! existing differential-test scripts unchanged.
//!
//! # Example
//!
//! ```bash
//! # Compare undupes against jdupes over the current directory
//! dupediff
//!
//! # Compare against fdupes over a specific tree, JSON report
//! dupediff --reference-cmd fdupes --output json ~/data
//!
//! # Enumerate with fd, exclude the VCS metadata from find
//! dupediff --use-fd ~/data
//! dupediff --find-options "-not -path '*/.git/*'" ~/data
//! ```

use clap::{Parser, ValueEnum};

/// Differential equivalence tester for duplicate file finders.
///
/// Runs a trusted reference finder and a candidate finder over the same
/// subtree, normalizes both outputs, and reports exactly which duplicate
/// groups the two tools disagree on.
#[derive(Debug, Parser)]
#[command(name = "dupediff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except the report and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Paths to scan for duplicates
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<String>,

    /// Reference finder command; `-H -r` and the paths are appended
    #[arg(long, value_name = "CMD", env = "PROG_NAME", default_value = "jdupes -z")]
    pub reference_cmd: String,

    /// Candidate finder command; receives a NUL-delimited file list on stdin
    #[arg(long, value_name = "CMD", env = "UNDUPES", default_value = "undupes")]
    pub candidate_cmd: String,

    /// Enumerate files with `fd` instead of `find`
    #[arg(long)]
    pub use_fd: bool,

    /// Extra options spliced into the `find` command line
    #[arg(
        long,
        value_name = "OPTS",
        env = "FIND_OPTIONS",
        default_value = "",
        allow_hyphen_values = true,
        conflicts_with = "use_fd"
    )]
    pub find_options: String,

    /// Report format (text for humans, json for scripting)
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: ReportFormat,

    /// Emit errors as structured JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

/// Report format for comparison results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text report
    Text,
    /// JSON report for scripting
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["dupediff"]);

        assert_eq!(cli.paths, ["."]);
        assert_eq!(cli.reference_cmd, "jdupes -z");
        assert_eq!(cli.candidate_cmd, "undupes");
        assert!(!cli.use_fd);
        assert_eq!(cli.output, ReportFormat::Text);
    }

    #[test]
    fn test_multiple_paths() {
        let cli = Cli::parse_from(["dupediff", "/a", "/b"]);

        assert_eq!(cli.paths, ["/a", "/b"]);
    }

    #[test]
    fn test_tool_overrides() {
        let cli = Cli::parse_from([
            "dupediff",
            "--reference-cmd",
            "fdupes",
            "--candidate-cmd",
            "./build/undupes",
        ]);

        assert_eq!(cli.reference_cmd, "fdupes");
        assert_eq!(cli.candidate_cmd, "./build/undupes");
    }

    #[test]
    fn test_use_fd_conflicts_with_find_options() {
        let result = Cli::try_parse_from([
            "dupediff",
            "--use-fd",
            "--find-options",
            "-mindepth 2",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_values() {
        let cli = Cli::parse_from(["dupediff", "--output", "json"]);
        assert_eq!(cli.output, ReportFormat::Json);
        assert_eq!(cli.output.to_string(), "json");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["dupediff", "-q", "-v"]);

        assert!(result.is_err());
    }
}
