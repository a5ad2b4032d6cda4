//! Command implementations.

mod list;
mod query;

pub use list::{ListCommand, ShowCommand};
pub use query::{AllCommand, QueryCommand};

use std::str::FromStr;

use auditrack_querygen::TrackedResource;

use crate::error::CliError;

/// Resolve a resource name given on the command line.
pub(crate) fn parse_resource(name: &str) -> Result<TrackedResource, CliError> {
    TrackedResource::from_str(&name.to_lowercase()).map_err(|_| {
        CliError::not_found_with_suggestions(
            "tracked resource",
            name,
            TrackedResource::all().map(|r| r.to_string()).collect(),
        )
    })
}
