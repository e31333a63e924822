//! Low-level synchronous process management utilities.

use std::{
    process::{Child, ExitStatus},
    thread::sleep,
    time::{Duration, Instant},
};

use tracing::debug;

use crate::prelude::*;

/// Current status of a running process.
pub enum ProcessStatus {
    /// Process has completed with exit status.
    Done(ExitStatus),
    /// Process is still running.
    Running,
}

/// Outcome of waiting on a child with a deadline.
#[derive(Debug)]
pub enum WaitOutcome {
    /// The child exited on its own.
    Exited(ExitStatus),
    /// The deadline passed; the child was killed and reaped.
    DeadlineExpired,
}

/// Check process status without blocking.
///
/// Note: this may never report `ProcessStatus::Done` for a process that
/// is blocked waiting for stdin. Use [`stop_child`] and
/// [`capture_exit_status`] to handle such cases.
pub fn get_process_status(child: &mut Child) -> Result<ProcessStatus> {
    match child.try_wait().map_err(Error::Wait)? {
        Some(exit_status) => Ok(ProcessStatus::Done(exit_status)),
        None => Ok(ProcessStatus::Running),
    }
}

/// Terminate a child process.
pub fn stop_child(child: &mut Child) -> Result<()> {
    child.kill().map_err(Error::Kill)
}

/// Wait for a child process and capture its exit status.
///
/// This closes the stdin pipe, which can unblock children waiting for
/// input.
pub fn capture_exit_status(child: &mut Child) -> Result<ExitStatus> {
    child.wait().map_err(Error::Wait)
}

/// Wait for a child until it exits or `deadline` passes.
///
/// Polls instead of blocking so the deadline stays a hard wall-clock
/// bound. On expiry the child is killed and reaped before the call
/// returns.
pub fn wait_with_deadline(child: &mut Child, deadline: Instant) -> Result<WaitOutcome> {
    loop {
        if let ProcessStatus::Done(exit_status) = get_process_status(child)? {
            return Ok(WaitOutcome::Exited(exit_status));
        }
        if Instant::now() >= deadline {
            stop_child(child)?;
            let exit_status = capture_exit_status(child)?;
            debug!("killed child past deadline, exit status {exit_status}");
            return Ok(WaitOutcome::DeadlineExpired);
        }
        sleep(Duration::from_millis(10));
    }
}
