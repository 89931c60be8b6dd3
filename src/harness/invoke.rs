//! External tool invocation.
//!
//! Both tools and the file enumerator are opaque external collaborators,
//! run through the shell so users can pass full command lines ("jdupes -z",
//! "find . -type f -print0"). Stdout is captured for normalization; stderr
//! is inherited so tool diagnostics reach the user unmodified.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::normalize::Side;

/// A shell command line attributed to one side of the comparison.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    side: Side,
    command: String,
}

/// An external command could not be run to completion.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// The shell or the command could not be spawned.
    #[error("{side}: failed to spawn `{command}`: {source}")]
    Spawn {
        /// Which side the command belongs to.
        side: Side,
        /// The command line that failed.
        command: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Feeding the command's stdin or collecting its stdout failed.
    #[error("{side}: I/O with `{command}` failed: {source}")]
    Pipe {
        /// Which side the command belongs to.
        side: Side,
        /// The command line involved.
        command: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully.
    #[error("{side}: `{command}` exited with {status}")]
    ToolFailed {
        /// Which side the command belongs to.
        side: Side,
        /// The command line that failed.
        command: String,
        /// The reported exit status.
        status: std::process::ExitStatus,
    },
}

impl InvokeError {
    /// Which side's command failed.
    #[must_use]
    pub fn side(&self) -> Side {
        match self {
            InvokeError::Spawn { side, .. }
            | InvokeError::Pipe { side, .. }
            | InvokeError::ToolFailed { side, .. } => *side,
        }
    }
}

impl ToolCommand {
    /// Wrap a shell command line for the given side.
    #[must_use]
    pub fn new(side: Side, command: impl Into<String>) -> Self {
        Self {
            side,
            command: command.into(),
        }
    }

    /// The command line as given.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Run the command and capture its stdout.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError`] when the command cannot be spawned, its
    /// output cannot be collected, or it exits with a non-zero status.
    pub fn run(&self) -> Result<Vec<u8>, InvokeError> {
        self.run_inner(None)
    }

    /// Run the command with `input` on its stdin and capture its stdout.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError`] when the command cannot be spawned, piping
    /// fails, or it exits with a non-zero status.
    pub fn run_with_input(&self, input: &[u8]) -> Result<Vec<u8>, InvokeError> {
        self.run_inner(Some(input))
    }

    fn run_inner(&self, input: Option<&[u8]>) -> Result<Vec<u8>, InvokeError> {
        log::debug!("{}: running `{}`", self.side, self.command);

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| InvokeError::Spawn {
                side: self.side,
                command: self.command.clone(),
                source,
            })?;

        // Feed stdin from a separate thread; writing the full input from
        // this thread while the child fills its stdout pipe can deadlock.
        let writer = match (input, child.stdin.take()) {
            (Some(input), Some(mut stdin)) => {
                let input = input.to_vec();
                Some(std::thread::spawn(move || stdin.write_all(&input)))
            }
            _ => None,
        };

        let output = child
            .wait_with_output()
            .map_err(|source| InvokeError::Pipe {
                side: self.side,
                command: self.command.clone(),
                source,
            })?;

        if let Some(writer) = writer {
            match writer.join() {
                // A broken pipe means the tool stopped reading; its exit
                // status below is the authoritative outcome.
                Ok(Err(err)) if err.kind() != std::io::ErrorKind::BrokenPipe => {
                    return Err(InvokeError::Pipe {
                        side: self.side,
                        command: self.command.clone(),
                        source: err,
                    });
                }
                Ok(_) => {}
                Err(_) => {
                    return Err(InvokeError::Pipe {
                        side: self.side,
                        command: self.command.clone(),
                        source: std::io::Error::other("stdin writer thread panicked"),
                    });
                }
            }
        }

        if !output.status.success() {
            return Err(InvokeError::ToolFailed {
                side: self.side,
                command: self.command.clone(),
                status: output.status,
            });
        }

        log::debug!(
            "{}: `{}` produced {} byte(s)",
            self.side,
            self.command,
            output.stdout.len()
        );
        Ok(output.stdout)
    }
}
