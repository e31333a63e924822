//! High-level process runner with wall-clock deadline enforcement.

use std::{
    fs::File,
    path::PathBuf,
    process::{Child, Command, ExitStatus, Stdio},
    time::{Duration, Instant},
};

use tracing::debug;

use crate::{
    prelude::*,
    process::{WaitOutcome, capture_exit_status, wait_with_deadline},
};

/// Runs a single command to completion with redirected stdio.
///
/// Standard error is always discarded; stdin and stdout default to null
/// and can be wired to files.
pub struct Runner {
    /// Command to execute.
    command: String,
    /// Command line arguments.
    args: Vec<String>,
    /// Working directory for the child.
    current_dir: Option<PathBuf>,
    /// File wired to the child's standard input.
    stdin_file: Option<PathBuf>,
    /// File capturing the child's standard output.
    stdout_file: Option<PathBuf>,
}

impl Runner {
    /// Create a new runner with command and arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mj_io::runner::Runner;
    ///
    /// let runner = Runner::new("ls", vec!["-la", "/tmp"]);
    /// ```
    pub fn new(command: impl Into<String>, args: Vec<impl Into<String>>) -> Self {
        Self {
            command: command.into(),
            args: args.into_iter().map(|a| a.into()).collect(),
            current_dir: None,
            stdin_file: None,
            stdout_file: None,
        }
    }

    /// Set the working directory for the child.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Wire a file to the child's standard input.
    pub fn stdin_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdin_file = Some(path.into());
        self
    }

    /// Capture the child's standard output to a file.
    pub fn stdout_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdout_file = Some(path.into());
        self
    }

    /// Get the full command string with arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mj_io::runner::Runner;
    ///
    /// let runner = Runner::new("ls", vec!["-la"]);
    /// assert_eq!(runner.get_full_command(), "ls -la");
    /// ```
    pub fn get_full_command(&self) -> String {
        format!("{} {}", &self.command, &self.args.join(" "))
    }

    fn spawn(&self) -> Result<Child> {
        let stdin = match &self.stdin_file {
            Some(path) => Stdio::from(File::open(path)?),
            None => Stdio::null(),
        };
        let stdout = match &self.stdout_file {
            Some(path) => Stdio::from(File::create(path)?),
            None => Stdio::null(),
        };

        let mut command = Command::new(&self.command);
        command
            .args(&self.args)
            .stdin(stdin)
            .stdout(stdout)
            .stderr(Stdio::null());
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        debug!("running `{}`", self.get_full_command());
        command.spawn().map_err(Error::Spawn)
    }

    /// Spawn the command and wait for it under a wall-clock limit.
    ///
    /// On expiry the child is killed and reaped before the call returns
    /// [`WaitOutcome::DeadlineExpired`].
    pub fn run(&self, timeout: Duration) -> Result<WaitOutcome> {
        let mut child = self.spawn()?;
        wait_with_deadline(&mut child, Instant::now() + timeout)
    }

    /// Spawn the command and wait for it without a deadline.
    pub fn run_to_completion(&self) -> Result<ExitStatus> {
        let mut child = self.spawn()?;
        capture_exit_status(&mut child)
    }
}
