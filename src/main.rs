//! dupediff - Differential Equivalence Tester for Duplicate File Finders
//!
//! Entry point for the dupediff CLI application.

use clap::Parser;
use dupediff::{
    cli::Cli,
    error::{ExitCode, StructuredError},
    harness::PipelineError,
};

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();
    let json_errors = cli.json_errors;

    // Run the application logic
    match dupediff::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            // A tool breaking its output contract is a distinct outcome
            // from any other failure; classify before reporting.
            let (exit_code, side) = match err.downcast_ref::<PipelineError>() {
                Some(PipelineError::Malformed(e)) => {
                    (ExitCode::MalformedOutput, Some(e.side().to_string()))
                }
                Some(PipelineError::Invoke(e)) => {
                    (ExitCode::GeneralError, Some(e.side().to_string()))
                }
                None => (ExitCode::GeneralError, None),
            };

            // Report the error
            if json_errors {
                let structured = StructuredError::new(&err, exit_code, side);
                if let Ok(json) = serde_json::to_string_pretty(&structured) {
                    eprintln!("{}", json);
                } else {
                    eprintln!("[{}] Error: {:#}", exit_code.code_prefix(), err);
                }
            } else {
                eprintln!("[{}] Error: {:#}", exit_code.code_prefix(), err);
            }

            std::process::exit(exit_code.as_i32());
        }
    }
}
