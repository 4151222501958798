//! # Error Handling
//!
//! This module defines the centralized error type for `hugo-multiversion`.
//! It uses the `thiserror` library to describe every way a run can fail,
//! with enough context (flag names, version, branch, path) for the single
//! log line the binary emits before exiting.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failure modes. A run stops at the first
//!   one; nothing is retried and nothing already written to the output
//!   directory is rolled back.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! The failure modes are:
//!
//! - Flag validation, reported before any filesystem or network activity.
//! - Fetching a branch with the external `git` client.
//! - Copying a branch's content directory into the output tree.
//! - Creating the temporary workspace.
//! - Any other I/O error.

use thiserror::Error;

/// Main error type for hugo-multiversion operations
#[derive(Error, Debug)]
pub enum Error {
    /// One or more required flags were empty.
    ///
    /// `flags` holds the flag names (without the leading `--`) in the order
    /// they were checked.
    #[error("Invalid flags: {} must be specified", flags.iter().map(|f| format!("--{}", f)).collect::<Vec<_>>().join(", "))]
    Validation { flags: Vec<String> },

    /// The external `git` client failed to fetch a branch.
    ///
    /// Includes the repository URL, the version being built, the branch
    /// name, the client's error output, and an optional hint for resolution.
    #[error("Failed to fetch {url}@{branch} for version '{version}': {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Fetch {
        url: String,
        version: String,
        branch: String,
        message: String,
        /// Optional hint for how to resolve the fetch issue
        hint: Option<String>,
    },

    /// Copying content from a fetched branch into the output tree failed.
    #[error("Copy error at '{path}': {message}")]
    Copy { path: String, message: String },

    /// The temporary workspace could not be created.
    #[error("Workspace error: {message}")]
    Workspace { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a [`Error::Copy`] from an I/O failure at `path`.
    pub(crate) fn copy(path: &std::path::Path, err: std::io::Error) -> Self {
        Error::Copy {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
