use thiserror::Error;

/// Unified error type for next-semver operations
#[derive(Error, Debug)]
pub enum NextSemverError {
    #[error("unable to retrieve a semantic version string from input")]
    EmptyInput,

    #[error("no {marker} directory found and no default semver specified")]
    NoRepositoryAndNoFallback { marker: String },

    #[error("could not locate {program} command in PATH")]
    ToolNotFound { program: String },

    #[error("{command}: {status}: {stderr}")]
    TagCommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("git returned an empty tag")]
    EmptyTag,

    #[error("invalid semantic version '{input}': {reason}")]
    InvalidSemver { input: String, reason: String },

    #[error("unable to get latest git hash: {0}")]
    HashUnavailable(String),

    #[error("invalid prerelease '{prerelease}'")]
    InvalidPrerelease {
        prerelease: String,
        #[source]
        source: semver::Error,
    },

    #[error("expected at most one semantic version argument, got {0}")]
    TooManyArguments(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in next-semver
pub type Result<T> = std::result::Result<T, NextSemverError>;

impl NextSemverError {
    /// Create an invalid semver error with context
    pub fn invalid_semver(input: impl Into<String>, reason: impl Into<String>) -> Self {
        NextSemverError::InvalidSemver {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a tool-not-found error for the named program
    pub fn tool_not_found(program: impl Into<String>) -> Self {
        NextSemverError::ToolNotFound {
            program: program.into(),
        }
    }

    /// Create a hash lookup error with context
    pub fn hash_unavailable(msg: impl Into<String>) -> Self {
        NextSemverError::HashUnavailable(msg.into())
    }
}
