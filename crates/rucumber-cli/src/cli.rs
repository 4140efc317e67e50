//! Command-line surface and dispatch for the `rucumber` binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};

use crate::check::{check_paths, has_failures};
use crate::config::LogLevel;
use crate::output::{write_check, write_check_summary, write_checks_json};
use crate::scaffold::Scaffold;

/// Feature-file scaffolding and grammar checks for rucumber projects.
#[derive(Debug, Parser)]
#[command(name = "rucumber", author, version, about)]
pub struct Cli {
    /// Log level for diagnostics on stderr (overrides `RUCUMBER_LOG_LEVEL`).
    #[arg(long, global = true, value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the features directory with template files.
    Init(DirArgs),
    /// Remove the features directory and everything in it.
    Cleanup(DirArgs),
    /// Parse feature files and report their structure.
    Check(CheckArgs),
}

/// Arguments shared by `init` and `cleanup`.
#[derive(Debug, Args)]
pub struct DirArgs {
    /// Directory holding the `features` directory.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

/// Arguments for `check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Feature files, or directories of them.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
    /// Treat files that stop short of a `Then` step as failures.
    #[arg(long)]
    pub strict: bool,
}

fn parse_log_level(raw: &str) -> Result<LogLevel, String> {
    raw.parse().map_err(|e: crate::error::CliError| e.to_string())
}

/// Run the parsed command, writing its output to `out`.
///
/// # Errors
///
/// Returns an error when the filesystem operation behind `init` or
/// `cleanup` fails, or when output cannot be written.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<ExitCode> {
    match &cli.command {
        Commands::Init(args) => handle_init(args, out),
        Commands::Cleanup(args) => handle_cleanup(args, out),
        Commands::Check(args) => handle_check(args, out),
    }
}

fn handle_init(args: &DirArgs, out: &mut dyn Write) -> Result<ExitCode> {
    let created = Scaffold::new(&args.dir).create()?;
    for path in &created {
        writeln!(out, "Create: {}", path.display()).wrap_err("failed to write init listing")?;
    }
    tracing::info!(dir = %args.dir.display(), "initialised feature layout");
    Ok(ExitCode::SUCCESS)
}

fn handle_cleanup(args: &DirArgs, out: &mut dyn Write) -> Result<ExitCode> {
    if let Some(removed) = Scaffold::new(&args.dir).remove()? {
        writeln!(out, "Remove: {}", removed.display())
            .wrap_err("failed to write cleanup listing")?;
        tracing::info!(path = %removed.display(), "removed feature layout");
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_check(args: &CheckArgs, out: &mut dyn Write) -> Result<ExitCode> {
    let strict = args.strict || rucumber::config::strict_structure();
    let checks = check_paths(&args.paths);
    if args.json {
        write_checks_json(out, &checks)?;
    } else {
        for check in &checks {
            write_check(out, check)?;
        }
        write_check_summary(out, &checks)?;
    }
    out.flush().wrap_err("failed to flush check output")?;
    if has_failures(&checks, strict) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(&["rucumber", "init"], ".")]
    #[case(&["rucumber", "cleanup", "--dir", "work"], "work")]
    fn dir_defaults_to_current_directory(#[case] argv: &[&str], #[case] expected: &str) {
        let cli = Cli::try_parse_from(argv).unwrap_or_else(|e| panic!("parse: {e}"));
        let (Commands::Init(args) | Commands::Cleanup(args)) = &cli.command else {
            panic!("unexpected command: {:?}", cli.command);
        };
        assert_eq!(args.dir, PathBuf::from(expected));
    }

    #[test]
    fn check_requires_a_path() {
        assert!(Cli::try_parse_from(["rucumber", "check"]).is_err());
    }

    #[test]
    fn log_level_is_global_and_validated() {
        let cli = Cli::try_parse_from(["rucumber", "check", "a.feature", "--log-level", "DEBUG"])
            .unwrap_or_else(|e| panic!("parse: {e}"));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        let Err(err) = Cli::try_parse_from(["rucumber", "--log-level", "loud", "init"]) else {
            panic!("'loud' must be rejected");
        };
        assert!(err.to_string().contains("unknown log level"));
    }

    #[test]
    fn init_then_cleanup_reports_paths() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let args = DirArgs {
            dir: dir.path().to_path_buf(),
        };
        let mut out = Vec::new();
        handle_init(&args, &mut out).unwrap_or_else(|e| panic!("init: {e:#}"));
        handle_cleanup(&args, &mut out).unwrap_or_else(|e| panic!("cleanup: {e:#}"));
        let text = String::from_utf8(out).unwrap_or_else(|e| panic!("utf8: {e}"));
        assert_eq!(text.matches("Create: ").count(), 4);
        assert_eq!(text.matches("Remove: ").count(), 1);
    }
}
