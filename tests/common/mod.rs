// tests/common/mod.rs
//! Shared helpers for the CLI tests.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const DOGS: &str = "I am walking the Dogs";

/// The `words` binary built for this test run.
pub fn words() -> Command {
    Command::new(env!("CARGO_BIN_EXE_words"))
}

/// Write `contents` to a fresh file, returning the directory guard with it.
///
/// # Panics
///
/// Panics with a descriptive message if the file cannot be created.
pub fn input_file(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap_or_else(|e| panic!("Failed to create temp dir: {e}"));
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to create test file at {path:?}: {e}"));
    (dir, path)
}
