//! End-to-end engine tests.
//!
//! The compiler is a stub shell script (`cp` with a rejection marker)
//! so the battery runs without a real toolchain; submissions are shell
//! scripts that read the test case's stdin and behave accordingly.

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

use mj_config::MjConfig;
use mj_judge::{
    Engine, Verdict,
    nation::Nation,
    verify::MASK_INFO_FILE,
};
use ntest::timeout;
use tempfile::TempDir;

const ANSWER_STDOUT: &str = "hello\n";

fn nation(name: &str, id: u32, last_update: u32, current_d: u32) -> Nation {
    Nation {
        name: name.to_string(),
        id,
        last_update,
        current_d,
    }
}

fn mask_info_bytes(nations: &[Nation]) -> Vec<u8> {
    let mut buffer = Vec::new();
    for nation in nations {
        buffer.extend_from_slice(&nation.to_bytes());
    }
    buffer
}

fn write_executable(path: &Path, body: &str) {
    fs::write(path, body).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

struct Fixture {
    _root: TempDir,
    config: MjConfig,
}

impl Fixture {
    /// Test-case battery of `cases` identical cases: stdin `run`, the
    /// expected `mask.info` and log staged as input files (so a correct
    /// submission only has to print the expected stdout), and a stub
    /// compiler that copies the source unless it contains `BADCODE`.
    fn new(cases: u32) -> Self {
        let root = TempDir::new().unwrap();
        let testcase_root = root.path().join("testcase");
        let submission_root = root.path().join("submissions");
        fs::create_dir(&testcase_root).unwrap();
        fs::create_dir(&submission_root).unwrap();

        let nations = [nation("Freedonia", 1, 12, 7)];
        for index in 0..cases {
            let in_dir = testcase_root.join(format!("{index:02}00.in"));
            let out_dir = testcase_root.join(format!("{index:02}00.out"));
            fs::create_dir(&in_dir).unwrap();
            fs::create_dir(&out_dir).unwrap();

            fs::write(in_dir.join("stdin"), "run\n").unwrap();
            for dir in [&in_dir, &out_dir] {
                fs::write(dir.join(MASK_INFO_FILE), mask_info_bytes(&nations)).unwrap();
                fs::write(dir.join("1.log"), [0xAB, 0xC0]).unwrap();
            }
            fs::write(out_dir.join("stdout"), ANSWER_STDOUT).unwrap();
        }

        let compiler = root.path().join("mjcc");
        write_executable(
            &compiler,
            "#!/bin/sh\nif grep -q BADCODE \"$1\"; then\n    exit 1\nfi\ncp \"$1\" \"$3\"\n",
        );

        let mut config = MjConfig::default();
        config.judge.testcase_root = testcase_root;
        config.judge.submission_root = submission_root;
        config.judge.testcases = cases;
        config.judge.timeout_secs = 1;
        config.judge.compiler = compiler.display().to_string();

        Self { _root: root, config }
    }

    fn engine(&self) -> Engine {
        Engine::new(self.config.clone())
    }

    fn write_submission(&self, user: &str, name: &str, body: &str) -> PathBuf {
        let dir = self.config.judge.submission_root.join(user);
        if !dir.is_dir() {
            fs::create_dir(&dir).unwrap();
        }
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }
}

/// A correct submission: echo the expected stdout, sleep forever when a
/// test case asks for it.
const GOOD_SOURCE: &str = "#!/bin/sh\nread mode\nif [ \"$mode\" = sleep ]; then sleep 30; fi\necho hello\n";
const WRONG_SOURCE: &str = "#!/bin/sh\necho goodbye\n";
const BROKEN_SOURCE: &str = "BADCODE\n";

#[test]
#[timeout(60000)]
fn accepted_submission_earns_full_score() {
    let fixture = Fixture::new(2);
    let source = fixture.write_submission("alice", "good.c", GOOD_SOURCE);

    let report = fixture.engine().judge_submission(&source);
    assert!(report.compiled);
    assert_eq!(report.verdicts, vec![Verdict::Ac, Verdict::Ac]);
    assert_eq!(report.score, 20);
}

#[test]
#[timeout(60000)]
fn wrong_stdout_earns_nothing() {
    let fixture = Fixture::new(2);
    let source = fixture.write_submission("alice", "wrong.c", WRONG_SOURCE);

    let report = fixture.engine().judge_submission(&source);
    assert!(report.compiled);
    assert_eq!(report.verdicts, vec![Verdict::Wa, Verdict::Wa]);
    assert_eq!(report.score, 0);
}

#[test]
#[timeout(60000)]
fn timed_out_case_scores_only_the_others() {
    let fixture = Fixture::new(2);
    // Case 0 asks the submission to hang; case 1 stays normal.
    fs::write(
        fixture.config.case_input_dir(0).join("stdin"),
        "sleep\n",
    )
    .unwrap();
    let source = fixture.write_submission("alice", "slow.c", GOOD_SOURCE);

    let report = fixture.engine().judge_submission(&source);
    assert_eq!(report.verdicts, vec![Verdict::Tle, Verdict::Ac]);
    assert_eq!(report.score, 10);
}

#[test]
#[timeout(60000)]
fn compile_failure_scores_exactly_zero() {
    let fixture = Fixture::new(2);
    let source = fixture.write_submission("alice", "broken.c", BROKEN_SOURCE);

    let report = fixture.engine().judge_submission(&source);
    assert!(!report.compiled);
    assert!(report.verdicts.is_empty());
    assert_eq!(report.score, 0);
}

#[test]
#[timeout(60000)]
fn record_length_mismatch_beats_matching_stdout() {
    let fixture = Fixture::new(1);
    // The sandbox inherits an input-staged mask.info with two records
    // while the reference answer has one; stdout still matches.
    let staged = mask_info_bytes(&[
        nation("Freedonia", 1, 12, 7),
        nation("Sylvania", 2, 8, 1),
    ]);
    fs::write(
        fixture.config.case_input_dir(0).join(MASK_INFO_FILE),
        staged,
    )
    .unwrap();
    let source = fixture.write_submission("alice", "good.c", GOOD_SOURCE);

    let report = fixture.engine().judge_submission(&source);
    assert_eq!(report.verdicts, vec![Verdict::WaInfoLenNe]);
    assert_eq!(report.score, 0);
}

#[test]
#[timeout(60000)]
fn broken_fixture_is_judge_error_not_a_crash() {
    let fixture = Fixture::new(1);
    // The reference answer lost its mask.info; that is an operator
    // problem, so the case is classified JE instead of aborting.
    fs::remove_file(
        fixture.config.case_answer_dir(0).join(MASK_INFO_FILE),
    )
    .unwrap();
    let source = fixture.write_submission("alice", "good.c", GOOD_SOURCE);

    let report = fixture.engine().judge_submission(&source);
    assert_eq!(report.verdicts, vec![Verdict::Je]);
    assert_eq!(report.score, 0);
}

#[test]
#[timeout(60000)]
fn unspawnable_executable_is_runtime_error() {
    let fixture = Fixture::new(1);
    // The stub compiler copies the source verbatim, so a submission
    // that is neither a script nor a real binary produces an
    // executable the kernel refuses to start.
    let source = fixture
        .config
        .judge
        .submission_root
        .join("alice-garbage.c");
    fs::write(&source, b"\x00\x01\x02not an executable\x00").unwrap();

    let report = fixture.engine().judge_submission(&source);
    assert!(report.compiled);
    assert_eq!(report.verdicts, vec![Verdict::Re]);
    assert_eq!(report.score, 0);
}

#[test]
#[timeout(120000)]
fn judge_all_reports_the_best_attempt_per_user() {
    let fixture = Fixture::new(2);
    fixture.write_submission("alice", "wrong.c", WRONG_SOURCE);
    fixture.write_submission("alice", "good.c", GOOD_SOURCE);
    fixture.write_submission("bob", "broken.c", BROKEN_SOURCE);
    fs::create_dir(fixture.config.judge.submission_root.join("carol")).unwrap();
    // Stray file in the submission root is not a user.
    fs::write(fixture.config.judge.submission_root.join("notes.txt"), "x").unwrap();

    let scores = fixture.engine().judge_all().unwrap();
    assert_eq!(scores.len(), 3);
    assert_eq!(scores["alice"], 20);
    assert_eq!(scores["bob"], 0);
    assert_eq!(scores["carol"], 0);
}
