use crate::error::{NextSemverError, Result};
use regex::Regex;
use semver::{BuildMetadata, Prerelease};
use std::fmt;

/// Accepted textual form: optional `v`, a major number, optional minor and
/// patch numbers, then optional prerelease and build metadata.
const VERSION_PATTERN: &str = r"^(v)?(0|[1-9][0-9]*)(?:\.(0|[1-9][0-9]*))?(?:\.(0|[1-9][0-9]*))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$";

/// Semantic version together with the prefix convention it was written in.
///
/// Precedence comparisons go through [`SemVer::version`]; the `v` prefix
/// only affects rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemVer {
    version: semver::Version,
    v_prefix: bool,
}

impl SemVer {
    /// Create a new version without prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemVer {
            version: semver::Version::new(major, minor, patch),
            v_prefix: false,
        }
    }

    /// Parse a version string such as `1.2.3`, `v1.2.3-rc.1+build.5` or `v1.2`.
    ///
    /// Missing minor or patch components are taken as 0. A long git tag
    /// descriptor (`v1.2.3-4-gabc1234`) parses with `4-gabc1234` as its
    /// prerelease.
    pub fn parse(input: &str) -> Result<Self> {
        let re = Regex::new(VERSION_PATTERN)
            .map_err(|e| NextSemverError::invalid_semver(input, e.to_string()))?;

        let captures = re.captures(input).ok_or_else(|| {
            NextSemverError::invalid_semver(
                input,
                "expected [v]MAJOR[.MINOR[.PATCH]][-PRERELEASE][+BUILD]",
            )
        })?;

        let number = |index: usize, name: &str| -> Result<u64> {
            match captures.get(index) {
                Some(m) => m.as_str().parse::<u64>().map_err(|e| {
                    NextSemverError::invalid_semver(input, format!("{} version: {}", name, e))
                }),
                None => Ok(0),
            }
        };

        let mut version =
            semver::Version::new(number(2, "major")?, number(3, "minor")?, number(4, "patch")?);

        if let Some(pre) = captures.get(5) {
            version.pre = Prerelease::new(pre.as_str())
                .map_err(|e| NextSemverError::invalid_semver(input, e.to_string()))?;
        }
        if let Some(build) = captures.get(6) {
            version.build = BuildMetadata::new(build.as_str())
                .map_err(|e| NextSemverError::invalid_semver(input, e.to_string()))?;
        }

        Ok(SemVer {
            version,
            v_prefix: captures.get(1).is_some(),
        })
    }

    /// The numeric version without prefix information
    pub fn version(&self) -> &semver::Version {
        &self.version
    }

    /// Whether the parsed text started with `v`
    pub fn has_v_prefix(&self) -> bool {
        self.v_prefix
    }

    /// Bump version according to bump type.
    ///
    /// Lower-significance components reset to 0 and prerelease and build
    /// metadata are always cleared.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow = |name: &str| {
            NextSemverError::invalid_semver(
                self.to_string(),
                format!("{} version cannot be incremented", name),
            )
        };

        let current = &self.version;
        let next = match bump_type {
            VersionBump::Major => semver::Version::new(
                current.major.checked_add(1).ok_or_else(|| overflow("major"))?,
                0,
                0,
            ),
            VersionBump::Minor => semver::Version::new(
                current.major,
                current.minor.checked_add(1).ok_or_else(|| overflow("minor"))?,
                0,
            ),
            VersionBump::Patch => semver::Version::new(
                current.major,
                current.minor,
                current.patch.checked_add(1).ok_or_else(|| overflow("patch"))?,
            ),
        };

        Ok(SemVer {
            version: next,
            v_prefix: self.v_prefix,
        })
    }

    /// Replace the prerelease identifier, validating it against semver grammar
    pub fn with_prerelease(mut self, prerelease: &str) -> Result<Self> {
        self.version.pre =
            Prerelease::new(prerelease).map_err(|source| NextSemverError::InvalidPrerelease {
                prerelease: prerelease.to_string(),
                source,
            })?;
        Ok(self)
    }

    /// Render the version in its original prefix convention (`v1.2.3` stays
    /// `v`-prefixed, `1.2.3` does not).
    pub fn original(&self) -> String {
        if self.v_prefix {
            format!("v{}", self.version)
        } else {
            self.version.to_string()
        }
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBump::Major => write!(f, "major"),
            VersionBump::Minor => write!(f, "minor"),
            VersionBump::Patch => write!(f, "patch"),
        }
    }
}
