//! Test environment for isolated Euclid CLI runs.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Result of running a Euclid CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse every stdout line as a JSON object.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {line}"))
            })
            .collect()
    }
}

/// Isolated test environment.
///
/// The binary runs with the project directory as its working directory and
/// with `XDG_CONFIG_HOME`/`HOME` pointed at a separate temp directory, so a
/// developer's own config never leaks into a test.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    euclid_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
            euclid_bin: PathBuf::from(env!("CARGO_BIN_EXE_euclid")),
        }
    }

    /// Write `./euclid.toml` in the project directory.
    pub fn with_project_config(self, content: &str) -> Self {
        std::fs::write(self.project_root.path().join("euclid.toml"), content).unwrap();
        self
    }

    /// Write the user-level config under the isolated config home.
    pub fn with_user_config(self, content: &str) -> Self {
        let dir = self.home_dir.path().join(".config/euclid");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), content).unwrap();
        self
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.euclid_bin);
        cmd.args(args)
            .current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("EUCLID_STRATEGY")
            .env_remove("EUCLID_VERBOSITY");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run euclid binary");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
