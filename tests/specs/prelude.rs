//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working directory for one spec
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `rel`, creating parent directories
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Create an empty directory at `rel`
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    /// A `file://` URL for `rel`
    pub fn file_url(&self, rel: &str) -> String {
        format!("file://{}", self.dir.path().join(rel).display())
    }

    pub fn varmodel(&self) -> CliBuilder {
        CliBuilder {
            args: Vec::new(),
            dir: Some(self.dir.path().to_path_buf()),
        }
    }
}

/// Run the CLI outside any project
pub fn cli() -> CliBuilder {
    CliBuilder {
        args: Vec::new(),
        dir: None,
    }
}

pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    fn run(self) -> std::process::Output {
        let mut cmd = Command::cargo_bin("varmodel").unwrap();
        cmd.args(&self.args).env_remove("RUST_LOG");
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd.output().unwrap()
    }

    /// Run and require exit status 0
    pub fn passes(self) -> RunAssert {
        let args = self.args.join(" ");
        let output = self.run();
        assert!(
            output.status.success(),
            "expected `varmodel {}` to pass\nstdout:\n{}\nstderr:\n{}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and require a non-zero exit status
    pub fn fails(self) -> RunAssert {
        let args = self.args.join(" ");
        let output = self.run();
        assert!(
            !output.status.success(),
            "expected `varmodel {}` to fail\nstdout:\n{}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        RunAssert { output }
    }
}

pub struct RunAssert {
    output: std::process::Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout missing {:?}:\n{}",
            expected,
            stdout
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout unexpectedly has {:?}:\n{}",
            unexpected,
            stdout
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr missing {:?}:\n{}",
            expected,
            stderr
        );
        self
    }

    /// Compare stdout exactly, with a readable diff on mismatch
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).unwrap()
    }
}
