//! # hugo-multiversion
//!
//! Builds a Hugo `content/` directory from documentation that lives on
//! several branches of a single git repository. Each branch is a
//! documentation "version"; its content directory is copied into
//! `<output>/<version>/`.
//!
//! ## Quick Example
//!
//! ```
//! use hugo_multiversion::version::{resolve, LATEST};
//!
//! let versions = resolve(&["v1=release-1", "v2=release-2"], Some("main"));
//! assert_eq!(versions["v1"], "release-1");
//! assert_eq!(versions[LATEST], "main");
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: The immutable `Config` built once from
//!   the command-line flags.
//! - **Version resolution (`version`)**: Turns `version=branch` tokens and the
//!   optional latest branch into a version map.
//! - **Fetching (`repository`, `git`)**: Shallow single-branch clones through
//!   the system `git` command, behind a trait so tests can substitute it.
//! - **Workspace (`workspace`)**: The temporary directory holding the clones,
//!   removed when the run ends unless debugging.
//! - **Copying (`filesystem`)**: Recursive directory copy that keeps
//!   permission bits.
//! - **Orchestration (`materializer`)**: Fetch then copy for every version,
//!   stopping at the first error.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod git;
pub mod logging;
pub mod materializer;
pub mod repository;
pub mod version;
pub mod workspace;
