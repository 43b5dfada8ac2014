//! Tower of Hanoi shell
//!
//! Hosts one puzzle for the lifetime of the process and exposes it as a
//! small tree: a directory per peg, a file per disc. Commands come either
//! from the command line (`;`-separated) or from stdin, one per line.
//!
//! Startup:
//! 1. Parse arguments (clap handles `--help` / `--version`).
//! 2. Initialise logging.
//! 3. Build the puzzle from the configuration. Out-of-range dimensions stop
//!    here with exit code 4.
//! 4. Run the commands. See [`error`] for exit codes.

mod cli;
mod config;
mod error;
mod logging;
mod namespace;
mod session;
mod shell;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::CliResult;
use crate::logging::init_logging;
use crate::session::Session;
use crate::shell::Shell;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let config = AppConfig::from_cli(&cli);
    debug!(?config, "configuration loaded");

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.log();
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli, config: &AppConfig) -> CliResult<()> {
    let session = Session::new(config)?;
    info!(
        pegs_n = config.puzzle.pegs_n,
        discs_n = config.puzzle.discs_n,
        "puzzle ready"
    );

    let stdout = io::stdout().lock();
    let mut shell = Shell::new(session, stdout, config.json);

    if cli.command.is_empty() {
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();
        shell.run_interactive(stdin.lock(), prompt)?;
    } else {
        shell.run_script(&cli.command.join(" "))?;
    }

    Ok(())
}
