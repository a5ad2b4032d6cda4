//! Resource inspection commands.

use clap::Parser;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, ProfileOutput, ResourceListOutput};

use super::parse_resource;

/// List tracked resources
#[derive(Debug, Parser)]
pub struct ListCommand {}

impl ListCommand {
    /// Print every tracked resource.
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        print_output(ctx.format, &ResourceListOutput::all())
    }
}

/// Show the fixed profile of a tracked resource
#[derive(Debug, Parser)]
pub struct ShowCommand {
    /// Tracked resource (application, pipeline-run)
    pub resource: String,
}

impl ShowCommand {
    /// Print the named resource's profile.
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let name = parse_resource(&self.resource)?;
        print_output(
            ctx.format,
            &ProfileOutput {
                name,
                profile: name.profile(),
            },
        )
    }
}
