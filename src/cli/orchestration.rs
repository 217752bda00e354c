//! Main workflow orchestration logic
//!
//! Wires the version source resolver to the transformer. Kept apart from the
//! clap definitions so the workflow can be driven programmatically, with any
//! [TagSource] standing in for git.

use std::path::Path;

use crate::config::Config;
use crate::domain::VersionBump;
use crate::error::{NextSemverError, Result};
use crate::git::TagSource;
use crate::source::{Origin, Resolver, VersionSource};
use crate::transform;

/// Arguments of a `next <major|minor|patch>` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextArgs {
    /// Component to increment
    pub bump: VersionBump,

    /// Positional versions; at most one is accepted
    pub versions: Vec<String>,
}

/// Result of a successful `next` workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextVersion {
    /// Formatted version, ready to print
    pub version: String,

    /// Where the bumped version came from
    pub origin: Origin,
}

/// Compute the next version.
///
/// # Arguments
///
/// * `args` - Bump target and positional versions
/// * `config` - Flags shared by all subcommands
/// * `tags` - Git lookups for tag resolution and `--add-git-hash`
/// * `repo_dir` - Directory checked for a git checkout
///
/// # Returns
///
/// The formatted version, or the first error encountered. Nothing is printed
/// here, so a failure never leaves partial output behind.
pub fn run_next<T: TagSource + ?Sized>(
    args: NextArgs,
    config: &Config,
    tags: &T,
    repo_dir: &Path,
) -> Result<NextVersion> {
    let NextArgs { bump, mut versions } = args;
    if versions.len() > 1 {
        return Err(NextSemverError::TooManyArguments(versions.len()));
    }

    let source = VersionSource::select(config.file.as_deref(), versions.pop());
    let raw = Resolver::new(repo_dir, tags, config).resolve(source)?;
    let version = transform::next_version(&raw.text, bump, config, tags)?;

    Ok(NextVersion {
        version,
        origin: raw.origin,
    })
}
