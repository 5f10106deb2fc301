//! Initializes, shows and bumps the semantic version kept in a version file.

#[cfg(test)]
#[path = "main_test.rs"]
mod test;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use bump_version::bump::{self, render_with_prefix};
use bump_version::logging::init_logging;
use bump_version::{Config, IncrementKind, WriteMode, DEFAULT_VERSION_FILE};
use clap::{Args, Parser, Subcommand};

/// Maintains a `major.minor.patch` version in a plain text file.
/// Prints the resulting version on success. Exits with 1 on failure.
#[derive(Parser, Debug)]
#[command(version, verbatim_doc_comment, arg_required_else_help = true)]
struct Cli {
    /// Print debug logs to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct VersionFileArg {
    /// A version file for storing the current version.
    #[arg(long, default_value = DEFAULT_VERSION_FILE)]
    version_file: PathBuf,
}

impl VersionFileArg {
    fn config(self) -> Config {
        Config::default().with_version_file(self.version_file)
    }
}

#[derive(Args, Debug)]
struct BumpArgs {
    /// Bump this version instead of the one read from the version file.
    version: Option<String>,
    #[command(flatten)]
    file: VersionFileArg,
    /// Print the bumped version without writing it to the version file.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

impl BumpArgs {
    fn execute(self, kind: IncrementKind) -> anyhow::Result<String> {
        let config = self.file.config();
        let mode = WriteMode::from_dry_run(self.dry_run);
        let version = bump::bump(&config, kind, self.version.as_deref(), mode)
            .with_context(|| format!("Failed to bump {kind} version."))?;
        Ok(version.to_string())
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the version file, 0.1.0 unless a version is given.
    Init {
        version: Option<String>,
        #[command(flatten)]
        file: VersionFileArg,
    },
    /// Bump the major version, resetting minor and patch.
    Major(BumpArgs),
    /// Bump the minor version, resetting patch.
    Minor(BumpArgs),
    /// Bump the patch version.
    Patch(BumpArgs),
    /// Print the current version.
    Show {
        /// Text printed before the version, e.g. `v`.
        #[arg(long, default_value_t = String::default())]
        prefix: String,
        #[command(flatten)]
        file: VersionFileArg,
    },
}

impl Command {
    /// Runs the command and returns the line to print.
    fn execute(self) -> anyhow::Result<String> {
        match self {
            Command::Init { version, file } => {
                let config = file.config();
                let version = bump::init(&config, version.as_deref()).with_context(|| {
                    format!("Failed to initialize {}.", config.version_file.display())
                })?;
                Ok(version.to_string())
            }
            Command::Major(args) => args.execute(IncrementKind::Major),
            Command::Minor(args) => args.execute(IncrementKind::Minor),
            Command::Patch(args) => args.execute(IncrementKind::Patch),
            Command::Show { prefix, file } => {
                let config = file.config();
                let version = bump::show(&config).with_context(|| {
                    format!("Failed to read {}.", config.version_file.display())
                })?;
                Ok(render_with_prefix(version, &prefix))
            }
        }
    }
}

fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let line = cli.command.execute()?;
    writeln!(out, "{line}").context("Failed to write the version to stdout.")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn });
    log::debug!("Parsed arguments: {cli:?}");

    run(cli, &mut io::stdout().lock())
}
