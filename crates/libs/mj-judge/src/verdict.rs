//! Per-test-case judging outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of judging one submission run against one test case.
///
/// Verdicts are terminal: a single run yields exactly one, chosen by
/// short-circuiting at the first discrepancy in the order the verifier
/// checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Output matches the reference answer.
    #[serde(rename = "AC")]
    Ac,

    /// Generic mismatch: stdout differs after normalization, or a
    /// per-nation log differs within its valid bits.
    #[serde(rename = "WA")]
    Wa,

    /// The record collections differ in length.
    #[serde(rename = "WA-INFO-LEN-NE")]
    WaInfoLenNe,

    /// A reference nation is absent from the submission's records.
    #[serde(rename = "WA-NATION-MISSING")]
    WaNationMissing,

    /// A nation's fields differ from the reference.
    #[serde(rename = "WA-NATION-INFO")]
    WaNationInfo,

    /// The submission did not produce an expected `<id>.log`.
    #[serde(rename = "WA-LOG-MISSING")]
    WaLogMissing,

    /// The submission could not be started at all. Non-zero exit codes
    /// are deliberately tolerated and never produce this verdict.
    #[serde(rename = "RE")]
    Re,

    /// The submission exceeded the wall-clock limit.
    #[serde(rename = "TLE")]
    Tle,

    /// The judge itself hit an inconsistency, e.g. a broken fixture.
    /// Signals an operator problem, not a submission fault.
    #[serde(rename = "JE")]
    Je,
}

impl Verdict {
    /// Whether this verdict earns points.
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Ac)
    }

    /// The canonical short tag for the verdict.
    pub fn tag(self) -> &'static str {
        match self {
            Verdict::Ac => "AC",
            Verdict::Wa => "WA",
            Verdict::WaInfoLenNe => "WA-INFO-LEN-NE",
            Verdict::WaNationMissing => "WA-NATION-MISSING",
            Verdict::WaNationInfo => "WA-NATION-INFO",
            Verdict::WaLogMissing => "WA-LOG-MISSING",
            Verdict::Re => "RE",
            Verdict::Tle => "TLE",
            Verdict::Je => "JE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
