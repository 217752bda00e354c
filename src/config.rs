use crate::git::TagStyle;
use std::path::PathBuf;

/// Per-invocation settings for computing the next version.
///
/// Built once from the command line and passed by reference to the resolver
/// and the transformer; nothing in the crate keeps flag state globally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Read the version from this file; `-` means standard input
    pub file: Option<PathBuf>,

    /// Keep a leading `v` of the input in the output
    pub preserve_v: bool,

    /// Prefix the version with `v` if it has none (implies `preserve_v`)
    pub add_v: bool,

    /// Ask git for the long `tag-commits-ghash` descriptor
    pub long_git_tags: bool,

    /// Append the short hash of `HEAD` to the prerelease
    pub add_git_hash: bool,

    /// Literal prerelease label
    pub prerelease: Option<String>,

    /// Version to use when git cannot provide one
    pub fallback: Option<String>,
}

impl Config {
    /// Tag form requested from git
    pub fn tag_style(&self) -> TagStyle {
        if self.long_git_tags {
            TagStyle::Long
        } else {
            TagStyle::Short
        }
    }

    /// Whether output keeps the `v` prefix
    pub fn preserves_v(&self) -> bool {
        self.preserve_v || self.add_v
    }

    /// Fallback version, trimmed; blank values count as unset
    pub fn fallback(&self) -> Option<&str> {
        self.fallback
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.file, None);
        assert!(!config.preserves_v());
        assert_eq!(config.tag_style(), TagStyle::Short);
        assert_eq!(config.fallback(), None);
    }

    #[test]
    fn test_add_v_implies_preserve_v() {
        let config = Config {
            add_v: true,
            ..Config::default()
        };
        assert!(config.preserves_v());
    }

    #[test]
    fn test_long_git_tags() {
        let config = Config {
            long_git_tags: true,
            ..Config::default()
        };
        assert_eq!(config.tag_style(), TagStyle::Long);
    }

    #[test]
    fn test_fallback_trimmed() {
        let config = Config {
            fallback: Some("  0.1.0 \n".to_string()),
            ..Config::default()
        };
        assert_eq!(config.fallback(), Some("0.1.0"));

        let blank = Config {
            fallback: Some("   ".to_string()),
            ..Config::default()
        };
        assert_eq!(blank.fallback(), None);
    }
}
