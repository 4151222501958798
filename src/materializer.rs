//! # Content Materializer
//!
//! Builds the output content tree for one run:
//!
//! 1.  **Check**: If no version was requested, log and stop without touching
//!     the filesystem.
//! 2.  **Workspace**: Create the temporary workspace that holds the clones.
//! 3.  **Output**: Make sure the output directory exists.
//! 4.  **Per version**: Fetch the branch into `<workspace>/repo/<version>`,
//!     then copy its content directory to `<output>/<version>`.
//!
//! Versions are processed one at a time. The first failure ends the run;
//! versions copied before it stay in the output directory, and the workspace
//! is still removed (unless debugging) because it is dropped on return.

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::filesystem::{self, CopyStats};
use crate::logging::VersionContext;
use crate::repository::{DefaultGitOperations, GitOperations};
use crate::workspace::Workspace;

/// One version written to the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedVersion {
    pub version: String,
    pub branch: String,
    pub destination: PathBuf,
    pub stats: CopyStats,
}

/// Everything a successful run produced, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub versions: Vec<MaterializedVersion>,
}

impl BuildSummary {
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Total number of files copied across all versions.
    pub fn file_count(&self) -> usize {
        self.versions.iter().map(|v| v.stats.files).sum()
    }
}

/// Fetches every requested branch and copies its content into the output tree.
pub struct ContentMaterializer<'a> {
    config: &'a Config,
    git_ops: Box<dyn GitOperations>,
    workspace_root: Option<PathBuf>,
}

impl<'a> ContentMaterializer<'a> {
    /// Create a materializer that uses the system `git` command.
    pub fn new(config: &'a Config) -> Self {
        Self::with_operations(config, Box::new(DefaultGitOperations::new(config.debug)))
    }

    /// Create a materializer with a custom `GitOperations` implementation.
    pub fn with_operations(config: &'a Config, git_ops: Box<dyn GitOperations>) -> Self {
        Self {
            config,
            git_ops,
            workspace_root: None,
        }
    }

    /// Create the workspace under `root` instead of the system temp directory.
    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = Some(root.into());
        self
    }

    /// Run the whole build.
    pub fn run(&self) -> Result<BuildSummary> {
        if !self.config.has_work() {
            info!("Nothing to do!");
            return Ok(BuildSummary::default());
        }

        let workspace = match &self.workspace_root {
            Some(root) => Workspace::create_in(root, self.config.debug)?,
            None => Workspace::create(self.config.debug)?,
        };
        info!(
            "Created temporary directory: directory={}",
            workspace.path().display()
        );

        create_output_dir(&self.config.output_dir).inspect_err(|_| {
            error!(
                "Error creating output directory: directory={}",
                self.config.output_dir.display()
            )
        })?;

        let mut summary = BuildSummary::default();
        for (version, branch) in self.config.versions() {
            let ctx = VersionContext::new(&version, &branch);
            info!("Adding version to list to generate: {}", ctx);

            let materialized = self.materialize_version(&workspace, ctx)?;
            summary.versions.push(materialized);
        }

        info!(
            "Built content directory: directory={} versions={}",
            self.config.output_dir.display(),
            summary.versions.len()
        );
        Ok(summary)
    }

    /// Fetch one branch and copy its content directory to `<output>/<version>`.
    pub fn materialize_version(
        &self,
        workspace: &Workspace,
        ctx: VersionContext<'_>,
    ) -> Result<MaterializedVersion> {
        let clone_dir = workspace.clone_dir(ctx.version);

        info!("Fetching repository at revision: {}", ctx);
        self.git_ops
            .clone_branch(&self.config.repo_url, ctx.version, ctx.branch, &clone_dir)
            .inspect_err(|e| error!("Failed to fetch repository: {} error={}", ctx, e))?;
        info!(
            "Fetched repository: {} path={}",
            ctx,
            clone_dir.display()
        );

        let src = clone_dir.join(&self.config.repo_content_dir);
        let dst = self.config.output_dir.join(ctx.version);

        info!("Copying content to output directory: {}", ctx);
        let stats = filesystem::copy_dir(&src, &dst).inspect_err(|e| {
            error!(
                "Failed to copy content from source repository to output directory: {} error={}",
                ctx, e
            )
        })?;

        Ok(MaterializedVersion {
            version: ctx.version.to_string(),
            branch: ctx.branch.to_string(),
            destination: dst,
            stats,
        })
    }
}

/// Create the output root, mode 0755 on Unix when newly created.
fn create_output_dir(dir: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(dir).map_err(|e| Error::copy(dir, e))
}
