//! # momo CLI
//!
//! Monorepo scaffolding and workspace management.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` so it can feed clap's `env` args and `MOMO_*` config.
//! 2. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Load configuration (file + env + defaults).
//! 5. Build the [`OutputManager`].
//! 6. Dispatch to the appropriate command handler.
//! 7. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success, or cancelled by the user |
//! |  1   | Internal / external tool error   |
//! |  2   | User / input error               |
//! |  3   | Resource not found               |
//! |  4   | Configuration error              |

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{debug, info, instrument};

use crate::{
    cli::{AddArgs, AddCommands, Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;

/// Run the CLI with arguments produced by `parse`. Shared by the `momo` and
/// `create-momo` binaries.
pub fn start<F>(parse: F) -> ExitCode
where
    F: FnOnce() -> Result<Cli, clap::Error>,
{
    // Missing .env is the normal case.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too, with exit code 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => return handle_error(CliError::from(e), cli.global.verbose_errors()),
    };

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref(), &cwd) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::config("Failed to load configuration", e);
            return handle_error(err, cli.global.verbose_errors());
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global);
    let verbose = cli.global.verbose_errors();

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, cwd, config, output) {
        Ok(()) => {
            info!("momo completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, cwd: PathBuf, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let Some(command) = cli.command else {
        return commands::create::execute_default(cwd, config, output);
    };

    match command {
        Commands::Create(args) => commands::create::execute(args, cwd, config, output),
        Commands::Add(AddArgs { command: None }) => commands::add::execute_prompted(cwd, config, output),
        Commands::Add(AddArgs { command: Some(AddCommands::App(args)) }) => {
            commands::add::execute_app(args, cwd, config, output)
        }
        Commands::Add(AddArgs { command: Some(AddCommands::Package(args)) }) => {
            commands::add::execute_package(args, cwd, config, output)
        }
        Commands::Add(AddArgs { command: Some(AddCommands::Dep(args)) }) | Commands::Dep(args) => {
            commands::dep::execute(args, cwd, config, output)
        }
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
        Commands::Build(args) => commands::task::execute(cli::TaskKind::Build, args, cwd, output),
        Commands::Dev(args) => commands::task::execute(cli::TaskKind::Dev, args, cwd, output),
        Commands::Lint(args) => commands::task::execute(cli::TaskKind::Lint, args, cwd, output),
        Commands::Start(args) => commands::task::execute(cli::TaskKind::Start, args, cwd, output),
        Commands::Test(args) => commands::task::execute(cli::TaskKind::Test, args, cwd, output),
        Commands::Graph(args) => commands::task::execute(cli::TaskKind::Graph, args, cwd, output),
        Commands::Login => commands::task::remote_cache(cli::TaskKind::Login, cwd, output),
        Commands::Logout => commands::task::remote_cache(cli::TaskKind::Logout, cwd, output),
        Commands::Link => commands::task::remote_cache(cli::TaskKind::Link, cwd, output),
        Commands::Unlink => commands::task::remote_cache(cli::TaskKind::Unlink, cwd, output),
        Commands::Clean => commands::task::clean(cwd, output),
        Commands::Doctor => commands::doctor::execute(cwd, config, output),
        Commands::List(args) => commands::list::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    if err.is_cancelled() {
        eprintln!("Operation cancelled.");
        return ExitCode::SUCCESS;
    }

    // Written to stderr so the message survives a redirected stdout.
    let msg = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_momo_structure_is_valid() {
        cli::CreateMomoCli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
