//! Version resolution
//!
//! Turns the `--branches` tokens and the optional `--latest-branch` value
//! into a map from version name (the output subdirectory) to the git branch
//! that holds that version's content.
//!
//! A token is either `version=branch` or a bare `name`, in which case the
//! name is used for both. Nothing here ever fails: a malformed token simply
//! becomes a version named after the whole token.

use std::collections::BTreeMap;

/// The version name reserved for `--latest-branch`.
pub const LATEST: &str = "latest";

/// Resolved mapping of version name to branch name.
///
/// Iteration follows the sorted order of version names, so runs over the
/// same flags always process versions in the same order.
pub type VersionMap = BTreeMap<String, String>;

/// A single `version=branch` pair parsed from a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    pub version: String,
    pub branch: String,
}

/// Parse one `version=branch` token.
///
/// Without an `=` the token is both version and branch. With one or more
/// `=` the text before the first one is the version, and every remaining
/// part is concatenated with no separator, so `a=b=c` yields branch `bc`.
pub fn parse_version_spec(token: &str) -> VersionSpec {
    let mut parts = token.split('=');
    let version = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    if rest.is_empty() {
        return VersionSpec {
            version: token.to_string(),
            branch: token.to_string(),
        };
    }

    VersionSpec {
        version: version.to_string(),
        branch: rest.concat(),
    }
}

/// Parse a list of tokens into a [`VersionMap`].
///
/// Tokens are applied in order; a later token for the same version
/// replaces the earlier one.
pub fn parse_branches<S: AsRef<str>>(tokens: &[S]) -> VersionMap {
    let mut map = VersionMap::new();
    for token in tokens {
        let spec = parse_version_spec(token.as_ref());
        map.insert(spec.version, spec.branch);
    }
    map
}

/// Resolve the full set of versions to build.
///
/// A non-empty `latest_branch` is always added under [`LATEST`], replacing
/// any `latest=...` token from `tokens`.
pub fn resolve<S: AsRef<str>>(tokens: &[S], latest_branch: Option<&str>) -> VersionMap {
    let mut map = parse_branches(tokens);
    if let Some(branch) = latest_branch.filter(|b| !b.is_empty()) {
        map.insert(LATEST.to_string(), branch.to_string());
    }
    map
}
