//! auditrack CLI
//!
//! Main entry point for the `auditrack` binary.

use std::process::ExitCode;

use auditrack_cli::cli::Cli;
use auditrack_cli::CliError;
use auditrack_common_config::Environment;
use auditrack_common_log::{LogConfig, LogLevel};
use clap::Parser;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.render());
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    Environment::init()?;
    init_logging(&cli)?;

    let config = cli.load_config()?;
    debug!(index = %config.search.index, resources = config.resources.len(), "configuration loaded");

    cli.execute(config)
}

/// Environment settings pick format and file; `-v`/`-q` pick the level.
fn init_logging(cli: &Cli) -> Result<(), CliError> {
    let config = LogConfig::from_env();
    let config = if cli.verbose > 0 || cli.quiet {
        config.with_level(LogLevel::from_verbosity(cli.verbose, cli.quiet))
    } else {
        config
    };
    auditrack_common_log::init(config)?;
    Ok(())
}
