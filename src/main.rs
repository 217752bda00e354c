use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use next_semver::cli::{self, Args, Command};
use next_semver::git::GitCommand;
use next_semver::{code, ui, NextSemverError};

/// Environment variable holding the log filter, e.g. `NEXT_SEMVER_LOG=debug`
const LOG_ENV: &str = "NEXT_SEMVER_LOG";

fn main() {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version go to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    if args.version {
        println!("next-semver {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = args.config();
    let target = match args.command {
        Some(Command::Next { target }) => target,
        Some(Command::Code) => {
            return code::write_sources(std::io::stdout().lock())
                .context("failed to write source listing");
        }
        None => {
            Args::command().print_help()?;
            return Ok(());
        }
    };

    let repo_dir = std::env::current_dir().context("cannot determine working directory")?;
    let git = GitCommand::from_env(&repo_dir);
    let name = target.name();

    match cli::run_next(target.into(), &config, &git, &repo_dir) {
        Ok(next) => {
            tracing::debug!(origin = ?next.origin, "printing next version");
            println!("{}", next.version);
            Ok(())
        }
        Err(e @ NextSemverError::TooManyArguments(_)) => {
            let mut command = Args::command();
            if let Some(subcommand) = command
                .find_subcommand_mut("next")
                .and_then(|next| next.find_subcommand_mut(name))
            {
                ui::display_usage(&subcommand.render_help().to_string());
            }
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
