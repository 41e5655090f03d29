//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `fixture_index`: the real generated index in `tests/fixtures/`, parsed
//! - `isolated_store`: a fresh [`IndexStore`] plus a temp directory holding a
//!   copy of the fixture, so tests can rewrite the file without interference

#![allow(dead_code)] // Helpers used across different integration test crates

use docindex::{IndexStore, SearchIndex};
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Returns the project root directory (where Cargo.toml lives).
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Path of the generated index checked into `tests/fixtures/`.
pub fn fixture_path() -> PathBuf {
    project_root().join("tests/fixtures/search_index.js")
}

/// A temporary directory for test isolation, removed on drop.
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

impl TempWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content, creating parent directories as needed.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }

    /// Copies a file from the real filesystem into this workspace.
    ///
    /// # Panics
    /// Panics if copying fails.
    pub fn copy_file(&self, source: &Path, dest_relative: &str) -> PathBuf {
        let dest = self.root.join(dest_relative);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!(
                    "Failed to create parent directory for '{}': {}",
                    dest_relative, e
                )
            });
        }
        std::fs::copy(source, &dest).unwrap_or_else(|e| {
            panic!(
                "Failed to copy '{}' to '{}': {}",
                source.display(),
                dest_relative,
                e
            )
        });
        dest
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// A fresh store and a private copy of the fixture index.
pub struct IsolatedStore {
    pub workspace: TempWorkspace,
    pub index_path: PathBuf,
    pub store: Arc<IndexStore>,
}

#[fixture]
pub fn fixture_index() -> SearchIndex {
    docindex::tracing::init();
    SearchIndex::load_blocking(&fixture_path()).expect("fixture index should load")
}

#[fixture]
pub fn isolated_store() -> IsolatedStore {
    docindex::tracing::init();
    let workspace = TempWorkspace::new();
    let index_path = workspace.copy_file(&fixture_path(), "build/search_index.js");
    IsolatedStore {
        workspace,
        index_path,
        store: Arc::new(IndexStore::new()),
    }
}
