//! # dogo
//!
//! Microservice skeleton generator.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments.
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success, `--help`, `--version`            |
//! |  1   | Any failure, reported on standard output  |

use std::io::{IsTerminal as _, Write as _};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    // A missing .env is not an error.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(&e),
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    // The guard flushes the optional log file on drop; keep it until exit.
    let _log_guard = match init_logging(&cli.global) {
        Ok(guard) => guard,
        Err(e) => {
            println!("Failed to initialise logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;

    // ── 3. Load configuration ─────────────────────────────────────────────
    let require_file = cli.command.requires_config_file();
    let config = match AppConfig::load(cli.global.config.as_ref(), require_file) {
        Ok(cfg) => cfg,
        Err(e) => {
            // No usable config: report through an output manager on defaults.
            let output = OutputManager::new(&cli.global, &AppConfig::default());
            let err = CliError::config("failed to load configuration", e);
            return handle_error(err, verbose, &output);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, &output) {
        Ok(()) => {
            info!("dogo completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, &output),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Gen(cmd) => commands::generate::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, &cli.global, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, &cli.global, config, output),
    }
}

/// `--help` and `--version` exit 0; every real parse failure exits 1 with
/// clap's message on stdout.
fn handle_parse_error(err: &clap::Error) -> ExitCode {
    if !err.use_stderr() {
        let _ = err.print();
        return ExitCode::SUCCESS;
    }

    let rendered = if std::io::stdout().is_terminal() {
        err.render().ansi().to_string()
    } else {
        err.render().to_string()
    };
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "{rendered}");
    let _ = stdout.flush();
    ExitCode::FAILURE
}

/// Translate a `CliError` into a user message on stdout and exit code 1.
fn handle_error(err: CliError, verbose: bool, output: &OutputManager) -> ExitCode {
    err.log();

    let msg = if output.supports_color() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    let _ = output.error(&msg);

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
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = Cli::try_parse_from(["dogo", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }

    #[test]
    fn missing_name_is_a_failure() {
        let err = Cli::try_parse_from(["dogo", "gen"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
