//! Configuration management for the MJ judge.
//!
//! Provides the judging configuration (submission root, test-case root,
//! timeout, scoring) as an explicit value passed into the engine rather
//! than ambient state.
//!
//! # Usage
//!
//! ```rust
//! use mj_config::{MjConfig, MjUserConfig};
//!
//! let user_config = MjUserConfig::from_toml("").unwrap();
//! let config = MjConfig::from_user_config(user_config);
//! assert_eq!(config.judge.testcases, 10);
//! ```

pub mod error;
pub mod mj_config;
pub mod prelude;

pub use mj_config::{MjConfig, MjGlobalConfig, MjJudgeConfig, MjUserConfig};
