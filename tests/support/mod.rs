//! Test support utilities for homecfg integration tests.
//!
//! Provides an isolated repository root plus fake `op` and `openssl`
//! executables that log every invocation.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// No process-global state is mutated; child processes use `.current_dir()`
/// and an explicit `PATH`, so tests can safely run in parallel.
pub struct Test {
    /// Temporary repository root
    pub dir: TempDir,
    /// Directory holding the fake tools, first on `PATH`
    pub bin: TempDir,
}

impl Test {
    /// Create an empty repository with fake tools installed.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let bin = TempDir::new().expect("failed to create temp bin");

        install(bin.path(), "op", FAKE_OP);
        install(bin.path(), "openssl", FAKE_OPENSSL);

        Self { dir, bin }
    }

    /// Create a repository whose template file already has `contents`.
    pub fn with_template(contents: &str) -> Self {
        let t = Self::new();
        t.write(TEMPLATE_FILE, contents);
        t
    }

    /// Absolute path of `rel` inside the repository.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write a file inside the repository.
    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(path, contents).expect("failed to write file");
    }

    /// Read a file inside the repository.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("failed to read file")
    }

    /// Every fake tool invocation so far, one per line.
    pub fn tool_log(&self) -> String {
        fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    /// Where the fake tools append their invocations.
    pub fn log_path(&self) -> PathBuf {
        self.bin.path().join("calls.log")
    }

    /// Sorted entries of the repository root.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .expect("failed to list repo")
            .map(|e| e.expect("bad entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn install(bin: &Path, name: &str, script: &str) {
    let path = bin.join(name);
    fs::write(&path, script).expect("failed to write fake tool");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("failed to make fake tool executable");
}
