//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated configuration environment
//! - A standard tree fixture

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Standard tree fixture used across CLI tests.
pub const FIXTURE: &str = r#"
database: master
tree:
  name: sitecore
  id: "{root}"
  children:
    - name: content
      children:
        - name: home
          children:
            - name: news
              display_name: Home News
        - name: about us
        - name: news
          id: "{news}"
          display_name: Noticias
        - name: products
          children:
            - name: "*"
            - name: widget
              display_name: Super Widget
        - name: intranet
          display_name: Staff
          readers: [editor]
sites:
  - name: website
    root_path: /sitecore/content
    start_item: /home
"#;

/// Environment variables that could leak into a test run.
const ITEMRES_VARS: [&str; 7] = [
    "ITEMRES_CONFIG",
    "ITEMRES_LOG_MODE",
    "ITEMRES_MATCH_MODE",
    "ITEMRES_FUZZY_STRATEGY",
    "ITEMRES_DISPLAY_NAME_FALLBACK",
    "ITEMRES_SITE_START_FALLBACK",
    "ITEMRES_CROSS_PRODUCT_FOR_ROOT",
];

/// Test environment with an isolated working and home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the standard tree fixture
    pub fixture: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with the standard fixture written.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let fixture = temp_path.join("tree.yaml");
        std::fs::write(&fixture, FIXTURE).expect("Failed to write fixture");
        std::fs::create_dir_all(temp_path.join("home")).expect("Failed to create home dir");

        Self {
            temp_dir,
            temp_path,
            fixture,
        }
    }

    /// Command running in the temp directory, with `HOME` pointing inside it
    /// and no `ITEMRES_*` variables set.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("itemres").expect("Failed to find itemres binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", self.temp_path.join("home"));
        for var in ITEMRES_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// `itemres resolve --tree <fixture> <item_path>`.
    pub fn resolve(&self, item_path: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("resolve")
            .arg("--tree")
            .arg(&self.fixture)
            .arg(item_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temp directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
