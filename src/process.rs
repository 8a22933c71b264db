//! Blocking execution of external programs.
//!
//! Everything `revive` learns about or does to tmux goes through a
//! [`ProcessRunner`]; tests substitute a scripted runner.

use crate::error::{Result, ReviveError};
use std::process::Stdio;

/// Runs an external program to completion and returns its output.
pub trait ProcessRunner {
    /// Executes `program args...` and returns stdout with trailing newlines
    /// trimmed. A non-zero exit yields [`ReviveError::Process`] carrying the
    /// captured stderr.
    fn run(&self, program: &str, args: &[String]) -> Result<String>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        (**self).run(program, args)
    }
}

/// Runs programs with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        tracing::debug!("Running: {} {}", program, args.join(" "));

        let output = std::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ReviveError::Process {
                program: program.to_string(),
                args: args.to_vec(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReviveError::Process {
                program: program.to_string(),
                args: args.to_vec(),
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(trim_trailing_newlines(&stdout).to_string())
    }
}

/// Strips trailing `\n`/`\r` so replies split into exactly one record per line.
pub fn trim_trailing_newlines(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

/// Arguments for a single invocation: a base command plus extra parts
/// appended before execution.
///
/// A builder is built for one call and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuilder {
    program: String,
    base: Vec<String>,
    extra: Vec<String>,
}

impl CommandBuilder {
    pub fn new<I, S>(program: &str, base: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            base: base.into_iter().map(Into::into).collect(),
            extra: Vec::new(),
        }
    }

    /// Appends parts after the base arguments.
    pub fn add<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra.extend(parts.into_iter().map(Into::into));
        self
    }

    /// Drops every appended part, keeping the base arguments.
    pub fn clear(&mut self) {
        self.extra.clear();
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> Vec<String> {
        self.base.iter().chain(self.extra.iter()).cloned().collect()
    }

    pub fn run<R: ProcessRunner>(&self, runner: &R) -> Result<String> {
        runner.run(&self.program, &self.args())
    }
}
