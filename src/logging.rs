//! Logging infrastructure for dupediff.
//!
//! Structured logging via the `log` facade and `env_logger` backend. The
//! level is determined by (in priority order):
//!
//! 1. `RUST_LOG` environment variable (if set)
//! 2. CLI flags: `--quiet` (error only) or `--verbose` (debug/trace)
//! 3. Default: info level
//!
//! Pipeline timings are reported at info level, so the default level shows
//! them; `--quiet` reduces the output to the report itself plus errors.

use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Initialize the logging subsystem based on CLI verbosity flags.
///
/// Call once at startup, before any logging calls are made.
///
/// # Panics
///
/// Panics if called more than once; `env_logger` can only be initialized
/// once per process.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();

    if env::var("RUST_LOG").is_ok() {
        // RUST_LOG takes precedence over the CLI flags.
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }

    configure_format(&mut builder);
    builder.init();

    log::debug!("logging initialized at level: {:?}", log::max_level());
}

/// Determine the log level from CLI flags.
fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Configure the log format based on build type.
///
/// - Debug builds: timestamp, level, module path
/// - Release builds: compact format (level + message only)
fn configure_format(builder: &mut Builder) {
    #[cfg(debug_assertions)]
    builder.format(|buf, record| {
        let timestamp = buf.timestamp_seconds();
        let level = record.level();
        let level_style = buf.default_level_style(level);
        writeln!(
            buf,
            "{} {level_style}{:<5}{level_style:#} [{}] {}",
            timestamp,
            level,
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    #[cfg(not(debug_assertions))]
    builder.format(|buf, record| {
        let level = record.level();
        let level_style = buf.default_level_style(level);
        writeln!(
            buf,
            "{level_style}{:<5}{level_style:#} {}",
            level,
            record.args()
        )
    });
}
