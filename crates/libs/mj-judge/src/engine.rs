//! Drives submissions through compilation and the test-case battery.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use mj_config::MjConfig;
use mj_io::{Runner, WaitOutcome};
use serde::Serialize;
use tempfile::{NamedTempFile, TempPath};
use tracing::{debug, info, warn};

use crate::{prelude::*, sandbox::Sandbox, verdict::Verdict, verify::verify_run};

/// Compilation failures.
#[derive(thiserror::Error, Debug)]
pub enum CompileError {
    /// The compiler rejected the source.
    #[error("compiler rejected {0}")]
    Rejected(PathBuf),

    /// The compiler itself could not be run.
    #[error(transparent)]
    Process(#[from] mj_io::error::Error),

    /// I/O failure while setting up the output path.
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Per-submission judging report.
#[derive(Debug, Serialize)]
pub struct SubmissionReport {
    /// Path of the judged source file.
    pub source: PathBuf,
    /// Whether compilation succeeded.
    pub compiled: bool,
    /// One verdict per test case, ascending index. Empty when the
    /// submission did not compile.
    pub verdicts: Vec<Verdict>,
    /// Total points earned.
    pub score: u32,
}

/// The judging engine.
///
/// Compiles a submission, then runs it through every test case strictly
/// sequentially, one disposable sandbox per case. All judging state is
/// carried by the explicit configuration; nothing is ambient.
pub struct Engine {
    config: MjConfig,
}

impl Engine {
    /// Create an engine over an explicit configuration.
    pub fn new(config: MjConfig) -> Self {
        Self { config }
    }

    /// The configuration the engine judges with.
    pub fn config(&self) -> &MjConfig {
        &self.config
    }

    /// Compile a submission source into a temporary executable.
    ///
    /// The compiler is an opaque step: it is invoked as
    /// `<compiler> <source> -o <exe>` with its output discarded, and is
    /// judged only by its exit status. The returned path is deleted on
    /// drop.
    pub fn compile(&self, source: &Path) -> core::result::Result<TempPath, CompileError> {
        let exe = NamedTempFile::new()?.into_temp_path();
        let runner = Runner::new(
            self.config.judge.compiler.clone(),
            vec![
                source.display().to_string(),
                "-o".to_string(),
                exe.display().to_string(),
            ],
        );
        let status = runner.run_to_completion()?;
        if status.success() {
            Ok(exe)
        } else {
            Err(CompileError::Rejected(source.to_path_buf()))
        }
    }

    /// Judge one compiled executable against one test case.
    ///
    /// Never returns an error: judge-internal faults become
    /// [`Verdict::Je`] so one broken case cannot abort a batch, and a
    /// submission that cannot even be started becomes [`Verdict::Re`].
    pub fn run_case(&self, exe: &Path, index: u32) -> Verdict {
        match self.try_run_case(exe, index) {
            Ok(verdict) => verdict,
            Err(Error::Process(mj_io::error::Error::Spawn(e))) => {
                warn!("case {index}: submission failed to start: {e}");
                Verdict::Re
            }
            Err(e) => {
                warn!("case {index}: judge error: {e}");
                Verdict::Je
            }
        }
    }

    fn try_run_case(&self, exe: &Path, index: u32) -> Result<Verdict> {
        let input_dir = self.config.case_input_dir(index);
        let ans_dir = self.config.case_answer_dir(index);

        let sandbox = Sandbox::stage(&input_dir, exe)?;
        if let WaitOutcome::DeadlineExpired = sandbox.run(self.config.timeout())? {
            return Ok(Verdict::Tle);
        }
        verify_run(&ans_dir, sandbox.path())
    }

    /// Judge a single submission source end to end.
    ///
    /// A submission that fails to build earns zero points; that is a
    /// score, not an error.
    pub fn judge_submission(&self, source: &Path) -> SubmissionReport {
        let exe = match self.compile(source) {
            Ok(exe) => exe,
            Err(e) => {
                debug!("compile error {}: {e}", source.display());
                return SubmissionReport {
                    source: source.to_path_buf(),
                    compiled: false,
                    verdicts: Vec::new(),
                    score: 0,
                };
            }
        };

        info!("run submission {}", source.display());
        let verdicts: Vec<Verdict> = (0..self.config.judge.testcases)
            .map(|index| {
                let verdict = self.run_case(&exe, index);
                debug!("case #{index}: {verdict}");
                verdict
            })
            .collect();

        let accepted = verdicts.iter().filter(|v| v.is_accepted()).count() as u32;
        SubmissionReport {
            source: source.to_path_buf(),
            compiled: true,
            verdicts,
            score: accepted * self.config.judge.points_per_case,
        }
    }

    /// Best score over all of one user's candidate submissions.
    pub fn judge_user(&self, user_dir: &Path) -> Result<u32> {
        let mut best = 0;
        for entry in fs::read_dir(user_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            best = best.max(self.judge_submission(&entry.path()).score);
        }
        Ok(best)
    }

    /// Judge every user under the submission root.
    ///
    /// Returns a user → best score mapping in deterministic (sorted)
    /// order. A user whose submissions cannot even be listed scores
    /// zero; one bad submission never aborts its siblings.
    pub fn judge_all(&self) -> Result<BTreeMap<String, u32>> {
        let mut scores = BTreeMap::new();
        for entry in fs::read_dir(&self.config.judge.submission_root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let user = entry.file_name().to_string_lossy().into_owned();
            info!("start {user}");
            let score = match self.judge_user(&entry.path()) {
                Ok(score) => score,
                Err(e) => {
                    warn!("user {user}: {e}");
                    0
                }
            };
            scores.insert(user, score);
        }
        Ok(scores)
    }
}
