use crate::error::{NextSemverError, Result};
use crate::git::{TagSource, TagStyle};
use std::cell::Cell;

/// Mock tag source for testing without running git
pub struct MockTagSource {
    short_tag: Option<String>,
    long_tag: Option<String>,
    hash: Option<String>,
    tag_calls: Cell<usize>,
    hash_calls: Cell<usize>,
}

impl MockTagSource {
    /// Create a mock where every lookup fails
    pub fn new() -> Self {
        MockTagSource {
            short_tag: None,
            long_tag: None,
            hash: None,
            tag_calls: Cell::new(0),
            hash_calls: Cell::new(0),
        }
    }

    /// Answer short tag lookups with `tag`
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.short_tag = Some(tag.into());
        self
    }

    /// Answer long tag lookups with `descriptor`
    pub fn with_long_tag(mut self, descriptor: impl Into<String>) -> Self {
        self.long_tag = Some(descriptor.into());
        self
    }

    /// Answer hash lookups with `hash`
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Number of tag lookups performed so far
    pub fn tag_calls(&self) -> usize {
        self.tag_calls.get()
    }

    /// Number of hash lookups performed so far
    pub fn hash_calls(&self) -> usize {
        self.hash_calls.get()
    }
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for MockTagSource {
    fn latest_tag(&self, style: TagStyle) -> Result<String> {
        self.tag_calls.set(self.tag_calls.get() + 1);
        let tag = match style {
            TagStyle::Short => &self.short_tag,
            TagStyle::Long => &self.long_tag,
        };
        tag.clone().ok_or_else(|| NextSemverError::TagCommandFailed {
            command: format!("git {}", style.args().join(" ")),
            status: "exit status: 128".to_string(),
            stderr: "fatal: No names found, cannot describe anything.".to_string(),
        })
    }

    fn latest_hash(&self) -> Result<String> {
        self.hash_calls.set(self.hash_calls.get() + 1);
        self.hash
            .clone()
            .ok_or_else(|| NextSemverError::hash_unavailable("fatal: not a git repository"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_tag_source_styles() {
        let tags = MockTagSource::new()
            .with_tag("v1.0.0")
            .with_long_tag("v1.0.0-3-gabc1234");

        assert_eq!(tags.latest_tag(TagStyle::Short).unwrap(), "v1.0.0");
        assert_eq!(tags.latest_tag(TagStyle::Long).unwrap(), "v1.0.0-3-gabc1234");
        assert_eq!(tags.tag_calls(), 2);
    }

    #[test]
    fn test_mock_tag_source_failures() {
        let tags = MockTagSource::default();
        assert!(matches!(
            tags.latest_tag(TagStyle::Short),
            Err(NextSemverError::TagCommandFailed { .. })
        ));
        assert!(matches!(
            tags.latest_hash(),
            Err(NextSemverError::HashUnavailable(_))
        ));
        assert_eq!(tags.hash_calls(), 1);
    }
}
