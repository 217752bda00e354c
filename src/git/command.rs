use crate::error::{NextSemverError, Result};
use crate::git::{first_output_line, TagSource, TagStyle, GIT_PROGRAM, SHORT_HASH_ARGS};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// [TagSource] backed by the `git` executable
///
/// The executable is looked up on every call, so a missing git only matters
/// when a lookup is actually needed.
pub struct GitCommand {
    search_path: Option<OsString>,
    repo_dir: PathBuf,
}

/// Outcome of a git run that did not succeed
struct Failure {
    command: String,
    status: String,
    stderr: String,
}

impl GitCommand {
    /// Create a git runner for `repo_dir`, searching the directories listed in
    /// `search_path` (same syntax as `PATH`) for the executable.
    pub fn new<P: AsRef<Path>>(search_path: Option<OsString>, repo_dir: P) -> Self {
        GitCommand {
            search_path,
            repo_dir: repo_dir.as_ref().to_path_buf(),
        }
    }

    /// Git runner for `repo_dir` using the process `PATH`
    pub fn from_env<P: AsRef<Path>>(repo_dir: P) -> Self {
        Self::new(std::env::var_os("PATH"), repo_dir)
    }

    /// Find the first regular, executable `git` file on the search path
    pub fn locate(&self) -> Result<PathBuf> {
        let search_path = self
            .search_path
            .as_ref()
            .ok_or_else(|| NextSemverError::tool_not_found(GIT_PROGRAM))?;

        which::which_in(GIT_PROGRAM, Some(search_path), &self.repo_dir)
            .map_err(|_| NextSemverError::tool_not_found(GIT_PROGRAM))
    }

    /// Run git with `args`, returning its stdout on success
    fn run(&self, args: &[&str]) -> Result<std::result::Result<Vec<u8>, Failure>> {
        let program = self.locate()?;
        let command = format!("{} {}", program.display(), args.join(" "));
        tracing::debug!(%command, dir = %self.repo_dir.display(), "running git");

        let output = Command::new(&program)
            .args(args)
            .current_dir(&self.repo_dir)
            .output();

        Ok(match output {
            Ok(output) if output.status.success() => Ok(output.stdout),
            Ok(output) => Err(Failure {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            }),
            Err(e) => Err(Failure {
                command,
                status: "failed to start".to_string(),
                stderr: e.to_string(),
            }),
        })
    }
}

impl TagSource for GitCommand {
    fn latest_tag(&self, style: TagStyle) -> Result<String> {
        match self.run(style.args())? {
            Ok(stdout) => Ok(first_output_line(&stdout)),
            Err(failure) => Err(NextSemverError::TagCommandFailed {
                command: failure.command,
                status: failure.status,
                stderr: failure.stderr,
            }),
        }
    }

    fn latest_hash(&self) -> Result<String> {
        match self.run(SHORT_HASH_ARGS)? {
            Ok(stdout) => Ok(first_output_line(&stdout)),
            Err(failure) => Err(NextSemverError::hash_unavailable(format!(
                "{}: {}: {}",
                failure.command, failure.status, failure.stderr
            ))),
        }
    }
}
