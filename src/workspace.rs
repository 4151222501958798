//! Temporary workspace holding one clone per version.
//!
//! The workspace lives exactly as long as the [`Workspace`] value. Dropping
//! it removes the directory, on success and on every error path alike,
//! unless it was created with `retain` set (the `--debug` flag), in which
//! case it is left on disk for inspection.

use std::path::{Path, PathBuf};

use log::{error, info};
use tempfile::TempDir;

use crate::error::{Error, Result};

/// Prefix of the temporary directory name.
pub const WORKSPACE_PREFIX: &str = "hugo-multiversion-";

/// A run-scoped temporary directory.
#[derive(Debug)]
pub struct Workspace {
    // `None` only once the directory has been released in `drop`.
    dir: Option<TempDir>,
    retain: bool,
}

impl Workspace {
    /// Create a workspace in the system temporary directory.
    pub fn create(retain: bool) -> Result<Self> {
        Self::create_in(std::env::temp_dir(), retain)
    }

    /// Create a workspace under `parent`.
    pub fn create_in<P: AsRef<Path>>(parent: P, retain: bool) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(parent.as_ref())
            .map_err(|e| Error::Workspace {
                message: format!(
                    "Failed to create temporary directory in '{}': {}",
                    parent.as_ref().display(),
                    e
                ),
            })?;
        Ok(Self {
            dir: Some(dir),
            retain,
        })
    }

    /// Root of the workspace.
    pub fn path(&self) -> &Path {
        self.dir
            .as_ref()
            .map(TempDir::path)
            .unwrap_or_else(|| Path::new(""))
    }

    /// Where the clone for `version` goes: `<workspace>/repo/<version>`.
    pub fn clone_dir(&self, version: &str) -> PathBuf {
        self.path().join("repo").join(version)
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let Some(dir) = self.dir.take() else {
            return;
        };

        if self.retain {
            let path = dir.keep();
            info!(
                "Skipping cleaning up temporary directory: directory={}",
                path.display()
            );
            return;
        }

        let path = dir.path().to_path_buf();
        match dir.close() {
            Ok(()) => info!("Cleaned up temporary directory: directory={}", path.display()),
            Err(e) => error!(
                "Failed to cleanup temporary directory: directory={} error={}",
                path.display(),
                e
            ),
        }
    }
}
