//! Thin wrappers around the system `git` command.
//!
//! Using the system client means authentication works exactly as it does
//! for the user on the command line:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig

use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, error};

use crate::error::Error;

/// Outcome of a subprocess that exited unsuccessfully or could not start.
#[derive(Debug)]
pub struct CommandFailure {
    /// Human readable description of the failure (stderr when captured).
    pub message: String,
}

/// Run `program` with `args`, waiting for it to exit.
///
/// With `echo` set the child inherits stdout and stderr, so its output goes
/// straight to the controlling terminal. Otherwise output is captured and
/// stderr is returned in the failure. No timeout is applied.
pub fn run_command(program: &str, args: &[&str], echo: bool) -> Result<(), CommandFailure> {
    debug!("Running command: cmd={} args={:?}", program, args);

    let mut command = Command::new(program);
    command.args(args);

    let (status, stderr) = if echo {
        let status = command
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| spawn_failure(program, e))?;
        (status, String::new())
    } else {
        let output = command.output().map_err(|e| spawn_failure(program, e))?;
        (
            output.status,
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        )
    };

    if status.success() {
        return Ok(());
    }

    error!(
        "Error running command: cmd={} args={:?} status={}",
        program, args, status
    );
    let message = if stderr.is_empty() {
        format!("{} exited with {}", program, status)
    } else {
        stderr
    };
    Err(CommandFailure { message })
}

fn spawn_failure(program: &str, err: io::Error) -> CommandFailure {
    let message = if err.kind() == io::ErrorKind::NotFound {
        format!("{} executable not found on PATH", program)
    } else {
        format!("failed to start {}: {}", program, err)
    };
    CommandFailure { message }
}

/// Shallow-clone a single branch of `url` into `target_dir`.
///
/// Runs `git clone --depth=1 --single-branch --branch <branch> <url> <target_dir>`.
/// A leftover directory at `target_dir` is removed first since git will not
/// clone into a non-empty directory.
pub fn clone_branch(
    url: &str,
    version: &str,
    branch: &str,
    target_dir: &Path,
    echo: bool,
) -> Result<(), Error> {
    let prepare_error = |path: &Path, e: io::Error| Error::Fetch {
        url: url.to_string(),
        version: version.to_string(),
        branch: branch.to_string(),
        message: format!("Failed to prepare '{}': {}", path.display(), e),
        hint: None,
    };

    if target_dir.exists() {
        fs::remove_dir_all(target_dir).map_err(|e| prepare_error(target_dir, e))?;
    }
    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent).map_err(|e| prepare_error(parent, e))?;
    }

    let target = target_dir.to_string_lossy().into_owned();
    let args = [
        "clone",
        "--depth=1",
        "--single-branch",
        "--branch",
        branch,
        url,
        target.as_str(),
    ];

    run_command("git", &args, echo).map_err(|failure| Error::Fetch {
        url: url.to_string(),
        version: version.to_string(),
        branch: branch.to_string(),
        hint: auth_hint(&failure.message),
        message: failure.message,
    })
}

/// Explain common authentication failures reported by git.
fn auth_hint(stderr: &str) -> Option<String> {
    if stderr.contains("Authentication failed")
        || stderr.contains("Permission denied")
        || stderr.contains("Could not read from remote repository")
    {
        Some(
            "Make sure you have access to the repository. For private repos, ensure you have \
             an SSH key added to ssh-agent, git credentials configured, or a personal access \
             token set up"
                .to_string(),
        )
    } else {
        None
    }
}
