//! External process invocation
//!
//! A single blocking primitive: spawn a tool in a given working directory,
//! merge its error stream into its standard output, wait for termination,
//! and hand back a bounded [`ProcessOutcome`].

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{WsBuildError, WsBuildResult};

/// Exit status and combined output stream of a finished subprocess.
///
/// The core never interprets the status or the output; callers that care
/// (the CLI, embedders) read them from here.
#[derive(Debug)]
pub struct ProcessOutcome {
    /// Exit status reported by the operating system
    pub status: ExitStatus,
    /// Captured stdout followed by captured stderr; line interleaving
    /// between the two streams is not preserved
    pub output: Vec<u8>,
}

impl ProcessOutcome {
    /// Whether the subprocess reported success
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Combined output as text, with invalid UTF-8 replaced
    pub fn output_lossy(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

/// Spawn `program` with `args`, cwd set to `cwd`, and block until it exits.
///
/// Launch failure (missing or unexecutable tool) is an error; any exit
/// status of a launched process is a normal outcome.
pub fn run_blocking(program: &str, args: &[String], cwd: &Path) -> WsBuildResult<ProcessOutcome> {
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| WsBuildError::Launch {
            tool: program.to_string(),
            source,
        })?;

    let mut combined = output.stdout;
    combined.extend_from_slice(&output.stderr);
    Ok(ProcessOutcome {
        status: output.status,
        output: combined,
    })
}
