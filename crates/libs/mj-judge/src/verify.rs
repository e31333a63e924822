//! Multi-stage comparison of a completed run against a reference answer.
//!
//! Checks short-circuit at the first discrepancy, in a fixed order that
//! is part of the judging contract: stdout, collection length, missing
//! record, record fields, missing log, log bits.

use std::{collections::HashMap, fs, path::Path};

use tracing::debug;

use crate::{
    bits::cmp_n_bits,
    nation::{Nation, parse_mask_info},
    prelude::*,
    sandbox::STDOUT_FILE,
    text::cmp_text,
    verdict::Verdict,
};

/// Structured record file, present once per test case on both sides.
pub const MASK_INFO_FILE: &str = "mask.info";

/// Judge a completed run against the reference answer directory.
///
/// Compares normalized stdout first, then hands off to
/// [`compare_output_dir`]. Missing or non-UTF-8 stdout on either side
/// is judged `WA`, not an error: "can't read it" counts as "wrong".
pub fn verify_run(ans_dir: &Path, out_dir: &Path) -> Result<Verdict> {
    let ans_stdout = fs::read_to_string(ans_dir.join(STDOUT_FILE));
    let out_stdout = fs::read_to_string(out_dir.join(STDOUT_FILE));
    let (Ok(ans_stdout), Ok(out_stdout)) = (ans_stdout, out_stdout) else {
        debug!("stdout missing or undecodable");
        return Ok(Verdict::Wa);
    };
    if !cmp_text(&ans_stdout, &out_stdout) {
        return Ok(Verdict::Wa);
    }
    compare_output_dir(ans_dir, out_dir)
}

/// Compare the structured `mask.info` records and per-nation logs.
///
/// Reference-side faults (unreadable or undecodable reference records,
/// missing reference logs) are returned as errors so the caller can
/// separate broken fixtures from submission mistakes. A submission that
/// produced no `mask.info` at all is judged `WA`; one that produced an
/// undecodable `mask.info` surfaces the decode fault.
pub fn compare_output_dir(ans_dir: &Path, out_dir: &Path) -> Result<Verdict> {
    let ans_raw = fs::read(ans_dir.join(MASK_INFO_FILE)).map_err(|e| {
        Error::Fixture(format!(
            "unreadable {MASK_INFO_FILE} in {}: {e}",
            ans_dir.display()
        ))
    })?;
    let ans_nations = parse_mask_info(&ans_raw)
        .map_err(|e| Error::Fixture(format!("undecodable reference {MASK_INFO_FILE}: {e}")))?;

    let out_raw = match fs::read(out_dir.join(MASK_INFO_FILE)) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("submission produced no {MASK_INFO_FILE}: {e}");
            return Ok(Verdict::Wa);
        }
    };
    let out_nations = parse_mask_info(&out_raw)?;

    if ans_nations.len() != out_nations.len() {
        return Ok(Verdict::WaInfoLenNe);
    }

    // Name is the key; a duplicate overwrites its predecessor.
    let out_by_name: HashMap<&str, &Nation> =
        out_nations.iter().map(|n| (n.name.as_str(), n)).collect();

    for ans_nation in &ans_nations {
        let Some(out_nation) = out_by_name.get(ans_nation.name.as_str()) else {
            return Ok(Verdict::WaNationMissing);
        };
        if **out_nation != *ans_nation {
            return Ok(Verdict::WaNationInfo);
        }

        let log_name = format!("{}.log", ans_nation.id);
        let ans_log = ans_dir.join(&log_name);
        if !ans_log.is_file() {
            return Err(Error::Fixture(format!(
                "missing reference log {}",
                ans_log.display()
            )));
        }
        let out_log = out_dir.join(&log_name);
        if !out_log.is_file() {
            return Ok(Verdict::WaLogMissing);
        }
        if !cmp_n_bits(
            &fs::read(&ans_log)?,
            &fs::read(&out_log)?,
            ans_nation.last_update,
        ) {
            return Ok(Verdict::Wa);
        }
    }

    Ok(Verdict::Ac)
}
