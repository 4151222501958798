//! # Run Configuration
//!
//! `Config` is the immutable description of one run. The binary builds it
//! once from the command-line flags and hands it by reference to everything
//! else; nothing in the library reads flags or environment on its own.

use std::path::PathBuf;

use log::error;

use crate::error::{Error, Result};
use crate::version::{self, VersionMap};

/// Default for both the content directory inside the repository and the
/// output directory, matching Hugo's layout.
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// Everything a run needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository location, passed verbatim to `git clone`.
    pub repo_url: String,
    /// Directory inside the repository to copy. Must be the same on every branch.
    pub repo_content_dir: PathBuf,
    /// Root of the generated content tree.
    pub output_dir: PathBuf,
    /// Branch to publish under the `latest` version, if any.
    pub latest_branch: Option<String>,
    /// Raw `version=branch` tokens.
    pub branches: Vec<String>,
    /// Keep the workspace and show `git` output.
    pub debug: bool,
}

impl Config {
    /// Create a configuration with default directories for `repo_url`.
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            repo_content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            output_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            latest_branch: None,
            branches: Vec::new(),
            debug: false,
        }
    }

    /// Check that every required value is non-empty.
    ///
    /// Each missing flag is logged on its own line before the combined
    /// [`Error::Validation`] is returned, so all problems show up in a
    /// single run.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("repo-url", self.repo_url.is_empty()),
            ("repo-content-dir", self.repo_content_dir.as_os_str().is_empty()),
            ("output-dir", self.output_dir.as_os_str().is_empty()),
        ];

        let missing: Vec<String> = checks
            .iter()
            .filter(|(_, empty)| *empty)
            .map(|(name, _)| {
                error!("--{} must be specified", name);
                name.to_string()
            })
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation { flags: missing })
        }
    }

    /// The `latest` branch, ignoring an empty value.
    pub fn latest_branch(&self) -> Option<&str> {
        self.latest_branch.as_deref().filter(|b| !b.is_empty())
    }

    /// Whether the flags ask for any version at all.
    pub fn has_work(&self) -> bool {
        self.latest_branch().is_some() || !self.branches.is_empty()
    }

    /// Resolve the versions this run will build.
    pub fn versions(&self) -> VersionMap {
        version::resolve(self.branches.as_slice(), self.latest_branch())
    }
}
