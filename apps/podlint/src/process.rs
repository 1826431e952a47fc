//! External process invocation.
//!
//! `ProcessRunner` is the seam between the lint orchestration and the OS.
//! The default `SystemProcessRunner` spawns real processes; tests swap in a
//! recording fake.

use crate::error::PodlintError;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Captured outcome of one external process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs external commands. Must be shareable across the two concurrent
/// lint invocations of a single file.
pub trait ProcessRunner: Send + Sync {
    /// Run `command` with `args` in `working_dir`, capturing both streams.
    ///
    /// A non-zero exit is a normal result; only a failure to spawn is an error.
    fn run(
        &self,
        command: &str,
        args: &[String],
        working_dir: &Path,
    ) -> Result<ProcessOutput, PodlintError>;

    /// Like `run`, but any failure (spawn error or non-zero exit) becomes
    /// `PodlintError::CommandUnavailable`, aborting the run.
    fn run_or_fail(
        &self,
        command: &str,
        args: &[String],
        working_dir: &Path,
    ) -> Result<ProcessOutput, PodlintError> {
        let cmdline = command_line(command, args);
        match self.run(command, args, working_dir) {
            Ok(out) if out.success() => Ok(out),
            Ok(out) => Err(PodlintError::CommandUnavailable {
                command: cmdline,
                code: out.exit_code,
            }),
            Err(_) => Err(PodlintError::CommandUnavailable {
                command: cmdline,
                code: 1,
            }),
        }
    }
}

/// Spawns real OS processes and decodes their output as UTF-8.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(
        &self,
        command: &str,
        args: &[String],
        working_dir: &Path,
    ) -> Result<ProcessOutput, PodlintError> {
        debug!(
            cmd = %command_line(command, args),
            dir = %working_dir.display(),
            "spawning"
        );
        let out = Command::new(command)
            .args(args)
            .current_dir(working_dir)
            .output()
            .map_err(|source| PodlintError::Spawn {
                command: command.to_string(),
                source,
            })?;
        // Killed by a signal: no exit code
        let exit_code = out.status.code().unwrap_or(-1);
        debug!(cmd = %command, exit_code, "finished");
        Ok(ProcessOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }
}

/// Render a command and its arguments as a single display string.
pub fn command_line(command: &str, args: &[String]) -> String {
    let mut s = command.to_string();
    for a in args {
        s.push(' ');
        s.push_str(a);
    }
    s
}
