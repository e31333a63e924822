//! Command handlers for `mjc`.

use std::path::Path;

use mj_judge::Engine;

use crate::error::Result;

/// Judge one submission and print its score.
///
/// Verbose mode prints the per-case trace; otherwise the bare integer
/// score is the only output.
pub fn handle_judge_one(engine: &Engine, submission: &Path, verbose: bool) -> Result<()> {
    let report = engine.judge_submission(submission);
    if verbose {
        println!("Run submission {}", report.source.display());
        for (index, verdict) in report.verdicts.iter().enumerate() {
            println!("Case #{index}: {verdict}");
        }
        println!("Total score: {}", report.score);
    } else {
        println!("{}", report.score);
    }
    Ok(())
}

/// Judge every user and print the user → best score mapping as JSON.
pub fn handle_judge_all(engine: &Engine) -> Result<()> {
    let scores = engine.judge_all()?;
    println!("{}", serde_json::to_string(&scores)?);
    Ok(())
}
