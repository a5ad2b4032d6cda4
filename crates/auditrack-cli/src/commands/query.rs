//! Query generation commands.

use auditrack_common_config::vars;
use clap::Parser;
use tracing::info;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, QueryListOutput, QueryOutput};

use super::parse_resource;

/// Print the query for one tracked resource
#[derive(Debug, Parser)]
pub struct QueryCommand {
    /// Tracked resource (application, pipeline-run)
    pub resource: String,

    /// Index to search; defaults to `search.index` from the config
    #[arg(short, long, env = vars::AUDITRACK_INDEX)]
    pub index: Option<String>,
}

impl QueryCommand {
    /// Print the query for the named resource.
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let resource = parse_resource(&self.resource)?;
        let index = ctx.index(self.index.as_deref())?;
        info!(%resource, index, "generating query");

        print_output(ctx.format, &QueryOutput::generate(resource, index))
    }
}

/// Print queries for every configured resource
#[derive(Debug, Parser)]
pub struct AllCommand {
    /// Index to search; defaults to `search.index` from the config
    #[arg(short, long, env = vars::AUDITRACK_INDEX)]
    pub index: Option<String>,
}

impl AllCommand {
    /// Print one query per configured resource.
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let index = ctx.index(self.index.as_deref())?;
        info!(count = ctx.config.resources.len(), index, "generating queries");

        let queries = ctx
            .config
            .resources
            .iter()
            .map(|&resource| QueryOutput::generate(resource, index))
            .collect();
        print_output(ctx.format, &QueryListOutput { queries })
    }
}
