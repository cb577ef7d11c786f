//! Shared test helpers and end-to-end conversion tests.

mod integration;

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for input and output files
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a test file with content
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}
