//! Logging setup and per-version log context.
//!
//! Log records go through the `log` facade to `env_logger` on stderr. The
//! default level is `info`; `RUST_LOG` overrides it as usual.

use std::fmt;

use env_logger::Env;
use log::SetLoggerError;

/// Install the stderr logger.
///
/// Fails only if a logger has already been installed for this process.
pub fn init() -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init()
}

/// The version and branch a log line is about.
///
/// Passed explicitly to whatever logs on behalf of one version and rendered
/// as `version=<v> branch=<b>`.
#[derive(Debug, Clone, Copy)]
pub struct VersionContext<'a> {
    pub version: &'a str,
    pub branch: &'a str,
}

impl<'a> VersionContext<'a> {
    pub fn new(version: &'a str, branch: &'a str) -> Self {
        Self { version, branch }
    }
}

impl fmt::Display for VersionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "version={} branch={}", self.version, self.branch)
    }
}
