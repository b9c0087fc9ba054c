//! Configuration types

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EuclidResult;
use crate::strategy::Strategy;

use super::loader;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: std::path::PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the configured level by the number of `-v` flags given.
    pub fn raised_by(self, count: u8) -> Self {
        let level = match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
            Verbosity::Debug => 3,
        };
        match level + u32::from(count) {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Exhaustive verification bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    #[serde(default = "default_verify_limit")]
    pub default_limit: i64,

    #[serde(default = "default_verify_max_limit")]
    pub max_limit: i64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            default_limit: default_verify_limit(),
            max_limit: default_verify_max_limit(),
        }
    }
}

fn default_verify_limit() -> i64 {
    200
}

fn default_verify_max_limit() -> i64 {
    2000
}

/// Benchmark configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default = "default_bench_iterations")]
    pub iterations: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: default_bench_iterations(),
        }
    }
}

fn default_bench_iterations() -> u64 {
    100_000
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub strategy: Strategy,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub bench: BenchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> EuclidResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> EuclidResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
