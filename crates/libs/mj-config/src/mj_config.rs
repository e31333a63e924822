//! Core configuration types for the MJ judge.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::prelude::*;

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_submission_root() -> PathBuf {
    PathBuf::from("submissions")
}

fn default_testcase_root() -> PathBuf {
    PathBuf::from("testcase")
}

fn default_testcases() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_points_per_case() -> u32 {
    10
}

fn default_compiler() -> String {
    "gcc".to_string()
}

/// Global settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MjGlobalConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for MjGlobalConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
        }
    }
}

/// Judging parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MjJudgeConfig {
    /// Root directory holding one subdirectory per user.
    #[serde(default = "default_submission_root")]
    pub submission_root: PathBuf,

    /// Root directory holding the `<NN>00.in` / `<NN>00.out` pairs.
    #[serde(default = "default_testcase_root")]
    pub testcase_root: PathBuf,

    /// Number of enumerated test cases.
    #[serde(default = "default_testcases")]
    pub testcases: u32,

    /// Wall-clock limit per test case, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Points awarded per accepted test case.
    #[serde(default = "default_points_per_case")]
    pub points_per_case: u32,

    /// Compiler command, invoked as `<compiler> <source> -o <exe>`.
    #[serde(default = "default_compiler")]
    pub compiler: String,
}

impl Default for MjJudgeConfig {
    fn default() -> Self {
        Self {
            submission_root: default_submission_root(),
            testcase_root: default_testcase_root(),
            testcases: default_testcases(),
            timeout_secs: default_timeout_secs(),
            points_per_case: default_points_per_case(),
            compiler: default_compiler(),
        }
    }
}

/// User-provided configuration from TOML files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MjUserConfig {
    /// Global settings.
    #[serde(default)]
    pub global: MjGlobalConfig,
    /// Judging parameters.
    #[serde(default)]
    pub judge: MjJudgeConfig,
}

impl MjUserConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(file_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(file_path)?;
        info!("loaded configuration from {}", file_path.display());
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(value: &str) -> Result<Self> {
        Ok(toml::from_str(value)?)
    }
}

/// Internal configuration handed to the judging engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MjConfig {
    /// Global settings.
    pub global: MjGlobalConfig,
    /// Judging parameters.
    pub judge: MjJudgeConfig,
}

impl MjConfig {
    /// Convert user configuration to internal configuration.
    pub fn from_user_config(config: MjUserConfig) -> Self {
        Self {
            global: config.global,
            judge: config.judge,
        }
    }

    /// Wall-clock limit per test case.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.judge.timeout_secs)
    }

    /// Input directory for test case `index` (`<NN>00.in`).
    pub fn case_input_dir(&self, index: u32) -> PathBuf {
        self.judge.testcase_root.join(format!("{index:02}00.in"))
    }

    /// Reference answer directory for test case `index` (`<NN>00.out`).
    pub fn case_answer_dir(&self, index: u32) -> PathBuf {
        self.judge.testcase_root.join(format!("{index:02}00.out"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize() -> Result<()> {
        let content = r#"
            # Judge configuration

            [global]
            version = "1.0.0"

            [judge]
            submission_root = "work/submissions"
            testcase_root = "work/testcase"
            testcases = 4
            timeout_secs = 5
            points_per_case = 25
            compiler = "cc"
        "#;
        let config = MjConfig::from_user_config(MjUserConfig::from_toml(content)?);
        assert_eq!(config.judge.submission_root, PathBuf::from("work/submissions"));
        assert_eq!(config.judge.testcases, 4);
        assert_eq!(config.judge.timeout_secs, 5);
        assert_eq!(config.judge.points_per_case, 25);
        assert_eq!(config.judge.compiler, "cc");
        Ok(())
    }

    #[test]
    fn partial_file_falls_back_to_defaults() -> Result<()> {
        let content = r#"
            [judge]
            timeout_secs = 2
        "#;
        let config = MjConfig::from_user_config(MjUserConfig::from_toml(content)?);
        assert_eq!(config.judge.timeout_secs, 2);
        assert_eq!(config.judge.testcases, 10);
        assert_eq!(config.judge.points_per_case, 10);
        assert_eq!(config.judge.compiler, "gcc");
        assert_eq!(config.judge.submission_root, PathBuf::from("submissions"));
        Ok(())
    }

    #[test]
    fn empty_file_is_the_reference_configuration() -> Result<()> {
        let config = MjConfig::from_user_config(MjUserConfig::from_toml("")?);
        assert_eq!(config, MjConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(30));
        Ok(())
    }

    #[test]
    fn case_directories_use_the_padded_naming_scheme() {
        let config = MjConfig::default();
        assert_eq!(config.case_input_dir(0), PathBuf::from("testcase/0000.in"));
        assert_eq!(config.case_answer_dir(0), PathBuf::from("testcase/0000.out"));
        assert_eq!(config.case_input_dir(9), PathBuf::from("testcase/0900.in"));
        assert_eq!(config.case_answer_dir(12), PathBuf::from("testcase/1200.out"));
    }
}
