//! Shared test utilities for E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let Some(repo) = DocsRepo::new() else { return };
//!     repo.branch("main", &[("content/_index.md", "home")]);
//!     let fixture = TestFixture::new();
//!     fixture.command().arg("--repo-url").arg(repo.url()).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use super::TestFixture;
    #[allow(unused_imports)]
    pub use super::{tree_listing, DocsRepo};
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;
}

/// Check whether a usable `git` executable is on PATH.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A temporary working directory for running the binary in.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    ///
    /// `TMPDIR` points inside the fixture so leftover workspaces can be
    /// inspected, and the `MULTIVERSION_*` variables are cleared so the
    /// caller's environment cannot leak in.
    pub fn command(&self) -> assert_cmd::Command {
        let tmp = self.path().join("tmp");
        std::fs::create_dir_all(&tmp).expect("Failed to create tmp directory");

        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("hugo-multiversion");
        cmd.current_dir(self.path())
            .env("TMPDIR", &tmp)
            .env_remove("MULTIVERSION_REPO_URL")
            .env_remove("MULTIVERSION_REPO_CONTENT_DIR")
            .env_remove("MULTIVERSION_OUTPUT_DIR")
            .env_remove("MULTIVERSION_LATEST_BRANCH")
            .env_remove("MULTIVERSION_BRANCHES")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Workspaces left behind in this fixture's `TMPDIR`.
    #[allow(dead_code)]
    pub fn leftover_workspaces(&self) -> Vec<PathBuf> {
        let tmp = self.path().join("tmp");
        match std::fs::read_dir(tmp) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .filter(|e| {
                    e.file_name()
                        .to_string_lossy()
                        .starts_with("hugo-multiversion-")
                })
                .map(|e| e.path())
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A local git repository with one branch per documentation version.
#[allow(dead_code)]
pub struct DocsRepo {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl DocsRepo {
    /// Create an empty repository, or `None` when `git` is not installed.
    pub fn new() -> Option<Self> {
        if !git_available() {
            println!("Skipping test: git is not available");
            return None;
        }
        let repo = Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        };
        repo.git(&["init", "-q"]);
        Some(repo)
    }

    /// `file://` URL so that shallow clones work for a local path.
    pub fn url(&self) -> String {
        format!("file://{}", self.temp_dir.path().display())
    }

    /// Create `branch` from an empty tree holding exactly `files`.
    pub fn branch(&self, branch: &str, files: &[(&str, &str)]) -> &Self {
        self.branch_with_scripts(branch, files, &[])
    }

    /// Like [`DocsRepo::branch`], with `scripts` committed as executable files.
    pub fn branch_with_scripts(
        &self,
        branch: &str,
        files: &[(&str, &str)],
        scripts: &[(&str, &str)],
    ) -> &Self {
        let head = format!("refs/heads/{}", branch);
        self.git(&["symbolic-ref", "HEAD", head.as_str()]);
        self.git(&["rm", "-rq", "--cached", "--ignore-unmatch", "."]);
        for entry in std::fs::read_dir(self.temp_dir.path()).expect("Failed to list repo") {
            let path = entry.expect("Failed to read entry").path();
            if path.file_name().is_some_and(|n| n == ".git") {
                continue;
            }
            if path.is_dir() {
                std::fs::remove_dir_all(&path).expect("Failed to clear repo");
            } else {
                std::fs::remove_file(&path).expect("Failed to clear repo");
            }
        }
        for (path, content) in files.iter().chain(scripts) {
            self.temp_dir
                .child(path)
                .write_str(content)
                .expect("Failed to write repo file");
        }
        self.git(&["add", "-A"]);
        for (path, _) in scripts {
            self.git(&["update-index", "--chmod=+x", path]);
        }
        self.git(&[
            "-c",
            "user.name=Docs Test",
            "-c",
            "user.email=docs@example.com",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "-q",
            "--allow-empty",
            "-m",
            branch,
        ]);
        self
    }

    fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.temp_dir.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Sorted list of files under `root`, relative to it, with `/` separators.
#[allow(dead_code)]
pub fn tree_listing(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .expect("walkdir yields paths under root")
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

