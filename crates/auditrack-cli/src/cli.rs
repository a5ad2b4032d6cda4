//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use auditrack_common_config::{vars, AuditrackConfig, ConfigLoader};
use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::commands::{AllCommand, ListCommand, QueryCommand, ShowCommand};
use crate::error::CliError;

/// auditrack - track-event queries over Kubernetes audit logs
///
/// Prints search queries that select successful creations of tracked
/// resources and shape them into analytics track events.
#[derive(Debug, Parser)]
#[command(
    name = "auditrack",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = vars::AUDITRACK_CONFIG,
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bare queries, one per line
    #[default]
    Text,
    /// Pretty-printed JSON records
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the query for one tracked resource
    Query(QueryCommand),

    /// Print queries for every configured resource
    All(AllCommand),

    /// List tracked resources
    #[command(visible_alias = "ls")]
    List(ListCommand),

    /// Show the fixed profile of a tracked resource
    Show(ShowCommand),
}

impl Cli {
    /// Load configuration from `--config` or the current directory.
    pub fn load_config(&self) -> Result<AuditrackConfig, CliError> {
        let config = match &self.config {
            Some(path) => ConfigLoader::load_file(path)?,
            None => ConfigLoader::default().load()?,
        };
        Ok(config)
    }

    /// Execute the selected command
    pub fn execute(self, config: AuditrackConfig) -> Result<(), CliError> {
        let ctx = CommandContext {
            config,
            format: self.format,
        };

        match self.command {
            Command::Query(cmd) => cmd.execute(&ctx),
            Command::All(cmd) => cmd.execute(&ctx),
            Command::List(cmd) => cmd.execute(&ctx),
            Command::Show(cmd) => cmd.execute(&ctx),
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: AuditrackConfig,
    /// Selected output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Index given on the command line, else the configured one.
    ///
    /// A blank override is rejected the same way a blank `search.index` is.
    pub fn index<'a>(&'a self, flag: Option<&'a str>) -> Result<&'a str, CliError> {
        match flag {
            Some(index) if index.trim().is_empty() => Err(CliError::config_with_hint(
                "search index must not be empty",
                format!("pass a non-empty --index or unset {}", vars::AUDITRACK_INDEX),
            )),
            Some(index) => Ok(index),
            None => Ok(&self.config.search.index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_query_with_index() {
        let cli = Cli::try_parse_from(["auditrack", "query", "application", "--index", "idx"])
            .unwrap();
        match cli.command {
            Command::Query(cmd) => {
                assert_eq!(cmd.resource, "application");
                assert_eq!(cmd.index.as_deref(), Some("idx"));
            }
            other => panic!("Expected query command, got {other:?}"),
        }
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["auditrack", "list", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["auditrack", "-q", "-v", "list"]).is_err());
    }

    #[test]
    fn test_index_falls_back_to_config() {
        let ctx = CommandContext {
            config: AuditrackConfig::default(),
            format: OutputFormat::Text,
        };
        assert_eq!(ctx.index(Some("flag")).unwrap(), "flag");
        assert_eq!(ctx.index(None).unwrap(), auditrack_common_config::DEFAULT_INDEX);
    }

    #[test]
    fn test_blank_index_override_is_rejected() {
        let ctx = CommandContext {
            config: AuditrackConfig::default(),
            format: OutputFormat::Text,
        };
        let err = ctx.index(Some("  ")).unwrap_err();
        assert_eq!(err.code(), "E001");
        assert_eq!(err.hint(), Some("pass a non-empty --index or unset AUDITRACK_INDEX"));
    }
}
