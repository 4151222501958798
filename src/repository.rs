//! # Repository Fetching
//!
//! The materializer never talks to `git` directly. It goes through the
//! [`GitOperations`] trait so the fetch step can be replaced in tests by an
//! implementation that lays out files on disk without a network or a `git`
//! binary.
//!
//! [`DefaultGitOperations`] is the production implementation and shells out
//! to the system `git` command via [`crate::git`].

use std::path::Path;

use crate::error::Result;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Fetch a single branch of `url` into `target_dir`.
    ///
    /// Only the branch tip is needed, so implementations should avoid
    /// retrieving the rest of the repository's history. `version` is only
    /// used for error context.
    fn clone_branch(&self, url: &str, version: &str, branch: &str, target_dir: &Path)
        -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command to perform a shallow single-branch clone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGitOperations {
    /// Let `git` write its progress and errors to the terminal.
    pub echo_output: bool,
}

impl DefaultGitOperations {
    pub fn new(echo_output: bool) -> Self {
        Self { echo_output }
    }
}

impl GitOperations for DefaultGitOperations {
    fn clone_branch(
        &self,
        url: &str,
        version: &str,
        branch: &str,
        target_dir: &Path,
    ) -> Result<()> {
        crate::git::clone_branch(url, version, branch, target_dir, self.echo_output)
    }
}
