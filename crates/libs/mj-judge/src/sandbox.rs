//! Disposable working directories for untrusted submission runs.

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    time::Duration,
};

use mj_io::{Runner, WaitOutcome};
use tempfile::TempDir;
use tracing::debug;

use crate::prelude::*;

/// Name the staged executable runs under inside the sandbox.
pub const EXE_NAME: &str = "main";

/// Input file wired to the submission's standard input.
pub const STDIN_FILE: &str = "stdin";

/// File capturing the submission's standard output.
pub const STDOUT_FILE: &str = "stdout";

/// A disposable working directory holding one staged test-case run.
///
/// The directory and everything in it are removed on drop, whatever the
/// outcome of the run.
pub struct Sandbox {
    dir: TempDir,
    /// The test case's stdin source, outside the sandbox.
    stdin: PathBuf,
}

impl Sandbox {
    /// Create a fresh sandbox staged with a test case's input files and
    /// the submission executable.
    ///
    /// Every regular file from `input_dir` except the `stdin` source is
    /// copied in verbatim; the executable lands at `main` with mode
    /// 0o755.
    pub fn stage(input_dir: &Path, exe: &Path) -> Result<Self> {
        let stdin = input_dir.join(STDIN_FILE);
        if !stdin.is_file() {
            return Err(Error::Fixture(format!(
                "missing {STDIN_FILE} file in {}",
                input_dir.display()
            )));
        }

        let dir = TempDir::new()?;
        for entry in fs::read_dir(input_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() || entry.file_name() == STDIN_FILE {
                continue;
            }
            fs::copy(entry.path(), dir.path().join(entry.file_name()))?;
        }

        let staged_exe = dir.path().join(EXE_NAME);
        fs::copy(exe, &staged_exe)?;
        let mut perms = fs::metadata(&staged_exe)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&staged_exe, perms)?;

        debug!("staged sandbox at {}", dir.path().display());
        Ok(Self { dir, stdin })
    }

    /// Path of the sandbox directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run the staged executable under a wall-clock limit.
    ///
    /// The sandbox is the child's working directory; stdin comes from
    /// the test case's `stdin` file, stdout is captured to `stdout`
    /// inside the sandbox and stderr is discarded. A non-zero exit
    /// status is tolerated: some legitimate submissions exit non-zero,
    /// so it is logged but never treated as a failure here.
    pub fn run(&self, timeout: Duration) -> Result<WaitOutcome> {
        let runner = Runner::new(format!("./{EXE_NAME}"), Vec::<String>::new())
            .current_dir(self.dir.path())
            .stdin_file(&self.stdin)
            .stdout_file(self.dir.path().join(STDOUT_FILE));

        let outcome = runner.run(timeout)?;
        if let WaitOutcome::Exited(status) = &outcome {
            if !status.success() {
                debug!("submission exited with {status}, tolerated");
            }
        }
        Ok(outcome)
    }
}
