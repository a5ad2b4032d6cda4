//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Test context with an isolated working directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: Option<PathBuf>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("Failed to create temp dir"),
            config_path: None,
        }
    }

    /// Write a config file and point `AUDITRACK_CONFIG` at it
    pub fn with_config(mut self, config: &str) -> Self {
        let path = self.temp_dir.path().join("auditrack.yaml");
        std::fs::write(&path, config).expect("Failed to write config");
        self.config_path = Some(path);
        self
    }

    /// Write `.auditrack/config.yaml` in the working directory
    pub fn with_project_config(self, config: &str) -> Self {
        let dir = self.temp_dir.path().join(".auditrack");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.yaml"), config).expect("Failed to write config");
        self
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured for this context
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("auditrack").expect("Binary not found");
        cmd.current_dir(self.path())
            .env_remove("AUDITRACK_CONFIG")
            .env_remove("AUDITRACK_INDEX")
            .env_remove("AUDITRACK_ENV")
            .env_remove("AUDITRACK_LOG_LEVEL")
            .env_remove("AUDITRACK_LOG_FILE")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        if let Some(path) = &self.config_path {
            cmd.env("AUDITRACK_CONFIG", path);
        }
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON output helpers
pub mod json {
    use serde_json::Value;

    pub fn parse_output(output: &[u8]) -> Value {
        serde_json::from_slice(output).expect("Failed to parse JSON output")
    }
}
