//! Test utilities for building scratch directory trees.
//!
//! This module is only compiled for tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::ignore::IGNORE_FILE_NAME;

/// A temporary directory tree for testing.
///
/// Cleaned up automatically when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file with the given content, creating parent directories
    /// as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create an empty directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Write a `.overviewignore` with the given patterns, one per line.
    pub fn write_ignore(&self, patterns: &[&str]) -> PathBuf {
        let mut contents = String::new();
        for pattern in patterns {
            contents.push_str(pattern);
            contents.push('\n');
        }
        self.add_file(IGNORE_FILE_NAME, &contents)
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
