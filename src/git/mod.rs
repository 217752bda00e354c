//! Git lookup abstraction layer
//!
//! The version resolver and the prerelease decoration both need two facts
//! from git: the most recent tag and the short hash of `HEAD`. The
//! [TagSource] trait narrows git down to exactly those two questions so the
//! rest of the crate never spawns processes directly.
//!
//! - [command::GitCommand]: runs the `git` executable found on `PATH`
//! - [mock::MockTagSource]: canned answers for tests
//!
//! ```rust
//! # use next_semver::git::{TagSource, TagStyle};
//! # fn example<T: TagSource>(tags: &T) -> next_semver::Result<()> {
//! let tag = tags.latest_tag(TagStyle::Short)?;
//! let hash = tags.latest_hash()?;
//! println!("{} at {}", tag, hash);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod mock;

pub use command::GitCommand;
pub use mock::MockTagSource;

use crate::error::Result;

/// Name of the git executable looked up on `PATH`
pub const GIT_PROGRAM: &str = "git";

/// Directory whose presence marks the working directory as a git checkout
pub const REPOSITORY_MARKER: &str = ".git";

/// `git describe` arguments for the bare name of the latest tag
pub const LATEST_TAG_ARGS: &[&str] = &["describe", "--tags", "--abbrev=0"];

/// `git describe` arguments for the `tag-commits-ghash` descriptor
pub const LONG_TAG_ARGS: &[&str] = &["describe", "--tags", "--long"];

/// `git rev-parse` arguments for the abbreviated hash of `HEAD`
pub const SHORT_HASH_ARGS: &[&str] = &["rev-parse", "--short", "HEAD"];

/// Which form of the latest tag to ask git for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagStyle {
    /// Tag name only, e.g. `v1.2.3`
    #[default]
    Short,
    /// Tag, commits since tag and hash, e.g. `v1.2.3-4-gabc1234`
    Long,
}

impl TagStyle {
    /// Arguments passed to git for this style
    pub fn args(self) -> &'static [&'static str] {
        match self {
            TagStyle::Short => LATEST_TAG_ARGS,
            TagStyle::Long => LONG_TAG_ARGS,
        }
    }
}

/// Source of tag and revision information
///
/// ## Error Handling
///
/// Implementations report a missing tool as
/// [ToolNotFound](crate::error::NextSemverError::ToolNotFound), a failed tag
/// lookup as
/// [TagCommandFailed](crate::error::NextSemverError::TagCommandFailed) and a
/// failed hash lookup as
/// [HashUnavailable](crate::error::NextSemverError::HashUnavailable). The
/// resolver relies on this split to decide when a fallback version applies.
pub trait TagSource {
    /// First line of the latest tag lookup, whitespace-trimmed.
    ///
    /// May be empty; callers decide whether that is an error.
    fn latest_tag(&self, style: TagStyle) -> Result<String>;

    /// First line of the short `HEAD` hash lookup, whitespace-trimmed.
    fn latest_hash(&self) -> Result<String>;
}

/// First line of process output, whitespace-trimmed
pub(crate) fn first_output_line(output: &[u8]) -> String {
    String::from_utf8_lossy(output)
        .lines()
        .next()
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_style_args() {
        assert_eq!(TagStyle::Short.args(), &["describe", "--tags", "--abbrev=0"]);
        assert_eq!(TagStyle::Long.args(), &["describe", "--tags", "--long"]);
        assert_eq!(TagStyle::default(), TagStyle::Short);
    }

    #[test]
    fn test_first_output_line() {
        assert_eq!(first_output_line(b"  v1.2.3  \nv1.2.2\n"), "v1.2.3");
        assert_eq!(first_output_line(b"abc1234\r\n"), "abc1234");
        assert_eq!(first_output_line(b""), "");
    }
}
