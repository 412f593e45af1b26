//! Test application factory for integration tests.
//!
//! Runs the real `halftone` binary inside a temporary working directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Captured result of one CLI invocation
pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Scratch directory plus a handle on the compiled binary
pub struct TestApp {
    dir: TempDir,
}

impl TestApp {
    /// Create a new test application in an empty temp directory
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Absolute path of a file inside the scratch directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file into the scratch directory
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    /// Read a file from the scratch directory
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.path(name)).expect("Failed to read output")
    }

    /// Run the binary with `args`, without CONFIG_FILE or RUST_LOG from the
    /// outer environment
    pub fn run(&self, args: &[&str]) -> CliOutput {
        self.run_with_env(args, &[])
    }

    /// Run the binary with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &Path)]) -> CliOutput {
        let mut command = Command::new(env!("CARGO_BIN_EXE_halftone"));
        command
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("CONFIG_FILE")
            .env_remove("RUST_LOG");
        for (key, value) in env {
            command.env(key, value);
        }

        let output = command.output().expect("Failed to run halftone binary");
        CliOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
