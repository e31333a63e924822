//! Judging engine for the MJ mask-simulation contest.
//!
//! Judges independently compiled submissions against a fixed battery of
//! test cases. Each run happens inside a disposable sandbox and its
//! artifacts are compared against the reference answer in three stages:
//! normalized stdout, the fixed-layout `mask.info` records, and the
//! per-nation logs at bit precision.

pub mod bits;
pub mod engine;
pub mod error;
pub mod nation;
pub mod prelude;
pub mod sandbox;
pub mod text;
pub mod verdict;
pub mod verify;

pub use engine::{CompileError, Engine, SubmissionReport};
pub use verdict::Verdict;
