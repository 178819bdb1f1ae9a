//! Shared testing utilities for nginx-auto-config CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated output directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory the CLI runs in and writes to.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled binary, running in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("nginx-auto-config").expect("Failed to locate nginx-auto-config");
        cmd.current_dir(self.work_dir()).env("NO_COLOR", "1").env_remove("NGINX_AUTO_CONFIG_LOG");
        cmd
    }

    /// Path of a file in the work directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.work_dir().join(name)
    }

    /// Read a generated file, panicking with context when it is missing.
    pub fn read(&self, name: &str) -> String {
        let path = self.path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()))
    }

    /// Write a file into the work directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("write test file");
        path
    }

    /// Names of all files in the work directory, sorted.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.work_dir())
            .expect("read work dir")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Join scripted answers into stdin text, one answer per line.
#[allow(dead_code)]
pub fn stdin_lines(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
