//! Process management utilities for the MJ judge.
//!
//! Judging is strictly sequential, so everything here is synchronous:
//! a spawned child is polled until it exits or a wall-clock deadline
//! passes, at which point it is killed and reaped.

pub mod error;
pub mod prelude;
pub mod process;
pub mod runner;

pub use process::WaitOutcome;
pub use runner::Runner;
