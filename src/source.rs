//! Version source resolution
//!
//! Decides where the version to bump comes from and reads exactly one raw
//! version string from it. Precedence, highest first:
//!
//! 1. `--file <path>` (or `--file -` for standard input)
//! 2. the positional version argument
//! 3. the latest git tag, when the working directory is a git checkout
//! 4. the `--default` fallback

use crate::config::Config;
use crate::error::{NextSemverError, Result};
use crate::git::{TagSource, TagStyle, REPOSITORY_MARKER};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where the raw version should be read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Version given on the command line
    Argument(String),
    /// First line of a file
    File(PathBuf),
    /// First line of standard input
    Stdin,
    /// Latest git tag, or the fallback
    Repository,
}

impl VersionSource {
    /// Pick the source for this invocation; a file overrides an argument,
    /// and with neither the repository is consulted.
    pub fn select(file: Option<&Path>, argument: Option<String>) -> Self {
        match (file, argument) {
            (Some(path), _) if path == Path::new("-") => VersionSource::Stdin,
            (Some(path), _) => VersionSource::File(path.to_path_buf()),
            (None, Some(argument)) => VersionSource::Argument(argument),
            (None, None) => VersionSource::Repository,
        }
    }
}

/// What actually produced a raw version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Argument,
    File,
    Stdin,
    GitTag,
    Fallback,
}

/// Unparsed version text and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVersion {
    pub text: String,
    pub origin: Origin,
}

impl RawVersion {
    fn new(text: impl Into<String>, origin: Origin) -> Self {
        RawVersion {
            text: text.into(),
            origin,
        }
    }
}

/// Read the first line of `reader` with its line terminator removed.
///
/// # Returns
/// * `Ok(String)` - The first line, otherwise verbatim
/// * `Err(EmptyInput)` - If there is no line or the first line is empty
/// * `Err(Io)` - If reading fails or the line is not UTF-8
pub fn read_first_line<R: BufRead>(reader: R) -> Result<String> {
    match reader.lines().next() {
        Some(Ok(line)) if !line.is_empty() => Ok(line),
        Some(Ok(_)) | None => Err(NextSemverError::EmptyInput),
        Some(Err(e)) => Err(e.into()),
    }
}

/// Resolves a [VersionSource] into a [RawVersion]
pub struct Resolver<'a, T: TagSource + ?Sized> {
    repo_dir: &'a Path,
    tags: &'a T,
    style: TagStyle,
    fallback: Option<&'a str>,
}

impl<'a, T: TagSource + ?Sized> Resolver<'a, T> {
    /// Create a resolver that looks for a git checkout in `repo_dir`
    pub fn new(repo_dir: &'a Path, tags: &'a T, config: &'a Config) -> Self {
        Resolver {
            repo_dir,
            tags,
            style: config.tag_style(),
            fallback: config.fallback(),
        }
    }

    /// Produce exactly one raw version string from `source`
    pub fn resolve(&self, source: VersionSource) -> Result<RawVersion> {
        let raw = match source {
            VersionSource::Argument(argument) => RawVersion::new(
                read_first_line(argument.as_bytes())?,
                Origin::Argument,
            ),
            VersionSource::File(path) => {
                let file = File::open(&path).map_err(|e| {
                    io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
                })?;
                RawVersion::new(read_first_line(BufReader::new(file))?, Origin::File)
            }
            VersionSource::Stdin => {
                RawVersion::new(read_first_line(io::stdin().lock())?, Origin::Stdin)
            }
            VersionSource::Repository => self.resolve_from_repository()?,
        };

        tracing::debug!(version = %raw.text, origin = ?raw.origin, "resolved version");
        Ok(raw)
    }

    fn resolve_from_repository(&self) -> Result<RawVersion> {
        let marker = self.repo_dir.join(REPOSITORY_MARKER);
        match fs::metadata(&marker) {
            Ok(metadata) => {
                if !metadata.is_dir() {
                    tracing::debug!(
                        path = %marker.display(),
                        "repository marker is a file, treating it as a gitlink"
                    );
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return self
                    .fallback
                    .map(|fallback| RawVersion::new(fallback, Origin::Fallback))
                    .ok_or_else(|| NextSemverError::NoRepositoryAndNoFallback {
                        marker: REPOSITORY_MARKER.to_string(),
                    });
            }
            Err(e) => return Err(e.into()),
        }

        let tag = match self.tags.latest_tag(self.style) {
            Ok(tag) => tag,
            Err(err @ NextSemverError::TagCommandFailed { .. }) => {
                return match self.fallback {
                    Some(fallback) => {
                        tracing::info!(
                            error = %err,
                            fallback,
                            "git tag lookup failed, using default"
                        );
                        Ok(RawVersion::new(fallback, Origin::Fallback))
                    }
                    None => Err(err),
                };
            }
            Err(err) => return Err(err),
        };

        if tag.is_empty() {
            return Err(NextSemverError::EmptyTag);
        }
        Ok(RawVersion::new(tag, Origin::GitTag))
    }
}
