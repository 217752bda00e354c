use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::orchestration::NextArgs;
use crate::config::Config;
use crate::domain::VersionBump;

const MAJOR_LONG_ABOUT: &str = "Increment the major version of the optional SEMVER argument. \
If SEMVER is left out and there is a .git directory in the current directory, git is \
executed to retrieve the latest tag, which is incremented if it parses as a semantic version.";

const MINOR_LONG_ABOUT: &str = "Increment the minor version of the optional SEMVER argument. \
If SEMVER is left out and there is a .git directory in the current directory, git is \
executed to retrieve the latest tag, which is incremented if it parses as a semantic version.";

const PATCH_LONG_ABOUT: &str = "Increment the patch version of the optional SEMVER argument. \
If SEMVER is left out and there is a .git directory in the current directory, git is \
executed to retrieve the latest tag, which is incremented if it parses as a semantic version.";

#[derive(Debug, Parser)]
#[command(
    name = "next-semver",
    about = "A tool to retrieve and increment semantic versions",
    disable_version_flag = true
)]
pub struct Args {
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Read semantic version from FILE, use - to read from stdin"
    )]
    pub file: Option<PathBuf>,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "If the semver is prefixed with a \"v\", preserve it in the output"
    )]
    pub preserve_v: bool,

    #[arg(
        short = 'V',
        long,
        global = true,
        help = "If the semver is not prefixed with a \"v\", add it"
    )]
    pub add_v: bool,

    #[arg(
        short,
        long,
        global = true,
        help = "When using git tags as semver, use long tags"
    )]
    pub long_git_tags: bool,

    #[arg(
        short = 'g',
        long,
        global = true,
        help = "Add the latest git hash as prerelease to the semver"
    )]
    pub add_git_hash: bool,

    #[arg(
        short,
        long,
        global = true,
        value_name = "STRING",
        help = "Add STRING as prerelease to the semver"
    )]
    pub prerelease: Option<String>,

    #[arg(
        short = 'd',
        long = "default",
        global = true,
        value_name = "SEMVER",
        help = "Default or fallback semver if the git attempt fails"
    )]
    pub fallback: Option<String>,

    #[arg(long, help = "Print version information")]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Retrieve the next semantic major, minor or patch version
    #[command(visible_aliases = ["n", "bump", "increment"])]
    Next {
        #[command(subcommand)]
        target: NextCommand,
    },

    /// Dump the code of this program to stdout
    Code,
}

#[derive(Debug, Subcommand)]
pub enum NextCommand {
    /// Increment major version
    #[command(long_about = MAJOR_LONG_ABOUT)]
    Major(VersionArg),

    /// Increment minor version
    #[command(long_about = MINOR_LONG_ABOUT)]
    Minor(VersionArg),

    /// Increment patch version
    #[command(long_about = PATCH_LONG_ABOUT)]
    Patch(VersionArg),
}

#[derive(Debug, clap::Args)]
pub struct VersionArg {
    /// Semantic version to increment
    #[arg(value_name = "SEMVER")]
    pub versions: Vec<String>,
}

impl Args {
    /// Flag values as an explicit configuration
    pub fn config(&self) -> Config {
        Config {
            file: self.file.clone(),
            preserve_v: self.preserve_v,
            add_v: self.add_v,
            long_git_tags: self.long_git_tags,
            add_git_hash: self.add_git_hash,
            prerelease: self.prerelease.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

impl NextCommand {
    /// Name of the subcommand, as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            NextCommand::Major(_) => "major",
            NextCommand::Minor(_) => "minor",
            NextCommand::Patch(_) => "patch",
        }
    }
}

impl From<NextCommand> for NextArgs {
    fn from(command: NextCommand) -> Self {
        let (bump, arg) = match command {
            NextCommand::Major(arg) => (VersionBump::Major, arg),
            NextCommand::Minor(arg) => (VersionBump::Minor, arg),
            NextCommand::Patch(arg) => (VersionBump::Patch, arg),
        };
        NextArgs {
            bump,
            versions: arg.versions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    fn next_args(args: Args) -> NextArgs {
        match args.command {
            Some(Command::Next { target }) => target.into(),
            other => panic!("expected next subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_next_patch_with_version() {
        let args = parse(&["next-semver", "next", "patch", "1.2.3"]);
        assert_eq!(
            next_args(args),
            NextArgs {
                bump: VersionBump::Patch,
                versions: vec!["1.2.3".to_string()],
            }
        );
    }

    #[test]
    fn test_next_aliases() {
        for alias in ["n", "bump", "increment"] {
            let args = parse(&["next-semver", alias, "major"]);
            assert_eq!(next_args(args).bump, VersionBump::Major);
        }
    }

    #[test]
    fn test_global_flags_before_and_after_subcommand() {
        let before = parse(&["next-semver", "-v", "-p", "beta", "next", "minor"]);
        let after = parse(&["next-semver", "next", "minor", "-v", "-p", "beta"]);
        assert_eq!(before.config(), after.config());
        assert!(before.preserve_v);
        assert_eq!(before.prerelease.as_deref(), Some("beta"));
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&[
            "next-semver", "-f", "-", "-V", "-l", "-g", "-d", "0.1.0", "next", "patch",
        ]);
        let config = args.config();
        assert_eq!(config.file, Some(PathBuf::from("-")));
        assert!(config.add_v);
        assert!(config.long_git_tags);
        assert!(config.add_git_hash);
        assert_eq!(config.fallback.as_deref(), Some("0.1.0"));
    }

    #[test]
    fn test_multiple_versions_are_collected() {
        let args = parse(&["next-semver", "next", "patch", "1.0.0", "2.0.0"]);
        assert_eq!(next_args(args).versions.len(), 2);
    }

    #[test]
    fn test_version_flag_is_long_only() {
        assert!(parse(&["next-semver", "--version"]).version);
        assert!(parse(&["next-semver", "-V", "next", "major"]).add_v);
    }

    #[test]
    fn test_code_subcommand() {
        assert!(matches!(
            parse(&["next-semver", "code"]).command,
            Some(Command::Code)
        ));
    }

    #[test]
    fn test_unknown_target_rejected() {
        assert!(Args::try_parse_from(["next-semver", "next", "micro"]).is_err());
    }

    #[test]
    fn test_next_command_name() {
        let args = parse(&["next-semver", "next", "minor"]);
        match args.command {
            Some(Command::Next { target }) => assert_eq!(target.name(), "minor"),
            other => panic!("expected next subcommand, got {:?}", other),
        }
    }
}
