//! Prerelease label composition
//!
//! The label written onto a bumped version is built from an optional literal
//! (`--prerelease`) and an optional short commit hash (`--add-git-hash`).
//! Grammar validation happens when the label is set on the version, see
//! [`SemVer::with_prerelease`](crate::domain::SemVer::with_prerelease).

/// Combine a literal prerelease and a commit hash into a single label.
///
/// The literal is trimmed. With both present the result is `literal-hash`;
/// with only one present it is used alone. Returns `None` when nothing is left.
///
/// # Examples
/// ```ignore
/// assert_eq!(compose(Some("beta"), Some("abc1234")), Some("beta-abc1234".into()));
/// assert_eq!(compose(Some("  rc.1 "), None), Some("rc.1".into()));
/// assert_eq!(compose(Some(" "), None), None);
/// ```
pub fn compose(literal: Option<&str>, hash: Option<&str>) -> Option<String> {
    let literal = literal.map(str::trim).filter(|s| !s.is_empty());
    let hash = hash.filter(|s| !s.is_empty());

    match (literal, hash) {
        (Some(literal), Some(hash)) => Some(format!("{}-{}", literal, hash)),
        (Some(literal), None) => Some(literal.to_string()),
        (None, Some(hash)) => Some(hash.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_literal_only() {
        assert_eq!(compose(Some("beta"), None), Some("beta".to_string()));
    }

    #[test]
    fn test_compose_trims_literal() {
        assert_eq!(compose(Some("  rc.1\t"), None), Some("rc.1".to_string()));
    }

    #[test]
    fn test_compose_hash_only() {
        assert_eq!(compose(None, Some("abc1234")), Some("abc1234".to_string()));
    }

    #[test]
    fn test_compose_literal_and_hash() {
        assert_eq!(
            compose(Some("beta.2"), Some("abc1234")),
            Some("beta.2-abc1234".to_string())
        );
    }

    #[test]
    fn test_compose_blank_literal_with_hash() {
        assert_eq!(compose(Some("   "), Some("abc1234")), Some("abc1234".to_string()));
    }

    #[test]
    fn test_compose_nothing() {
        assert_eq!(compose(None, None), None);
        assert_eq!(compose(Some(""), Some("")), None);
    }
}
