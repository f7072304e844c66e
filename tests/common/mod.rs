//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Every environment variable the tool reads
pub const SENZING_VARIABLES: &[&str] = &[
    "SENZING_DEBUG",
    "SENZING_DOCKER_COMPOSE_FILE",
    "SENZING_OUTPUT_FILE",
    "SENZING_SLEEP_TIME_IN_SECONDS",
    "SENZING_SUBCOMMAND",
    "SENZING_LOG_LEVEL",
    "SENZING_DOCKER_LAUNCHED",
];

/// Test project context
///
/// Creates a temporary directory holding compose files and generated scripts.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Command for the binary, run inside the project with a clean environment
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_docker-compose-air-gapper"));
        cmd.current_dir(self.path());
        for name in SENZING_VARIABLES {
            cmd.env_remove(name);
        }
        cmd.args(args);
        cmd
    }

    /// Run the binary with `args`
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute docker-compose-air-gapper")
    }

    /// Run the binary with `args` and extra environment variables
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut cmd = self.command(args);
        for (name, value) in env {
            cmd.env(name, value);
        }
        cmd.output()
            .expect("Failed to execute docker-compose-air-gapper")
    }

    /// Run the binary with `stdin` piped in
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn docker-compose-air-gapper");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");
        child
            .wait_with_output()
            .expect("Failed to wait for docker-compose-air-gapper")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample docker-compose file for testing
#[allow(dead_code)]
pub const SAMPLE_COMPOSE: &str = r"
version: '3'
services:
  api:
    image: senzing/senzing-api-server:2.8.0
  console:
    build: ./console
  webapp:
    image: senzing/entity-search-web-app:2.7.0
  db:
    image: postgres:14
";
