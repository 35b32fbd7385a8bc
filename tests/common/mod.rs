// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed scratch area so each integration
// test can set up isolated input and output files without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// An isolated scratch directory backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct TestDir {
    root: tempfile::TempDir,
}

impl TestDir {
    /// Create a fresh scratch directory.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Write `content` to `name` inside the scratch directory and return
    /// the full path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        std::fs::write(&path, content).expect("write test file");
        path
    }

    /// Path of `name` inside the scratch directory (the file need not exist).
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// The scratch directory itself.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}
