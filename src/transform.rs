//! Version transformation: parse, bump, decorate, render.

use crate::config::Config;
use crate::domain::{prerelease, SemVer, VersionBump};
use crate::error::{NextSemverError, Result};
use crate::git::TagSource;

/// Turn a raw version string into the next version, formatted for output.
///
/// 1. `--add-v` prepends a missing `v` and forces `v`-preserving output
/// 2. the string is parsed as a semantic version
/// 3. the requested component is bumped, clearing prerelease and build metadata
/// 4. the prerelease label is composed from `--prerelease` and, with
///    `--add-git-hash`, the short hash of `HEAD`
/// 5. the version is rendered with or without its `v` prefix
///
/// The hash is only looked up when requested, and a failed lookup is an
/// error rather than being skipped.
pub fn next_version<T: TagSource + ?Sized>(
    raw: &str,
    bump: VersionBump,
    config: &Config,
    tags: &T,
) -> Result<String> {
    let text = if config.add_v && !raw.starts_with('v') {
        format!("v{}", raw)
    } else {
        raw.to_string()
    };

    let next = SemVer::parse(&text)?.bump(bump)?;

    let hash = if config.add_git_hash {
        let hash = tags.latest_hash()?;
        if hash.is_empty() {
            return Err(NextSemverError::hash_unavailable("git printed no hash"));
        }
        Some(hash)
    } else {
        None
    };

    let next = match prerelease::compose(config.prerelease.as_deref(), hash.as_deref()) {
        Some(label) => next.with_prerelease(&label)?,
        None => next,
    };

    tracing::debug!(from = %text, to = %next, %bump, "bumped version");

    Ok(if config.preserves_v() {
        next.original()
    } else {
        next.to_string()
    })
}
