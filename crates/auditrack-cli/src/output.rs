//! Output formatting for CLI commands.

use std::io::Write;

use auditrack_querygen::{ResourceProfile, TrackedResource};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Trait for types that can be formatted for output
pub trait FormattedOutput {
    /// Plain text rendering.
    fn format_text(&self) -> String;

    /// JSON rendering.
    fn format_json(&self) -> Result<String, serde_json::Error>
    where
        Self: Serialize,
    {
        serde_json::to_string_pretty(self)
    }
}

/// Write `value` to `writer` in the selected format, followed by a newline.
pub fn write_output<T, W>(format: OutputFormat, value: &T, mut writer: W) -> Result<(), CliError>
where
    T: FormattedOutput + Serialize,
    W: Write,
{
    let output = match format {
        OutputFormat::Text => value.format_text(),
        OutputFormat::Json => value.format_json().map_err(|e| {
            CliError::Other(anyhow::anyhow!("JSON serialization failed: {e}"))
        })?,
    };

    writeln!(writer, "{output}")?;
    Ok(())
}

/// Print `value` to stdout in the selected format.
pub fn print_output<T>(format: OutputFormat, value: &T) -> Result<(), CliError>
where
    T: FormattedOutput + Serialize,
{
    write_output(format, value, std::io::stdout().lock())
}

/// One generated query.
#[derive(Debug, Serialize)]
pub struct QueryOutput {
    /// Resource the query selects.
    pub resource: TrackedResource,
    /// Index searched.
    pub index: String,
    /// The query text.
    pub query: String,
}

impl QueryOutput {
    /// Compose the query for `resource` against `index`.
    pub fn generate(resource: TrackedResource, index: &str) -> Self {
        Self {
            resource,
            index: index.to_string(),
            query: resource.query(index),
        }
    }
}

impl FormattedOutput for QueryOutput {
    fn format_text(&self) -> String {
        self.query.clone()
    }
}

/// Queries for several resources against one index.
#[derive(Debug, Serialize)]
pub struct QueryListOutput {
    /// One entry per configured resource, in config order.
    pub queries: Vec<QueryOutput>,
}

impl FormattedOutput for QueryListOutput {
    fn format_text(&self) -> String {
        self.queries
            .iter()
            .map(|q| q.query.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One row of `auditrack list`.
#[derive(Debug, Serialize)]
pub struct ResourceSummary {
    /// Name accepted on the command line.
    pub name: TrackedResource,
    /// Matched `objectRef.apiGroup`.
    pub api_group: &'static str,
    /// Matched `objectRef.resource`.
    pub resource: &'static str,
}

/// Every tracked resource and what it matches.
#[derive(Debug, Serialize)]
pub struct ResourceListOutput {
    /// Rows in declaration order.
    pub resources: Vec<ResourceSummary>,
}

impl ResourceListOutput {
    /// Summaries of every tracked resource.
    pub fn all() -> Self {
        let resources = TrackedResource::all()
            .map(|name| {
                let profile = name.profile();
                ResourceSummary {
                    name,
                    api_group: profile.api_group,
                    resource: profile.resource,
                }
            })
            .collect();
        Self { resources }
    }
}

impl FormattedOutput for ResourceListOutput {
    fn format_text(&self) -> String {
        let width = self
            .resources
            .iter()
            .map(|r| r.name.to_string().len())
            .max()
            .unwrap_or(0);
        self.resources
            .iter()
            .map(|r| {
                format!(
                    "{:<width$}  {}.{}",
                    r.name.to_string(),
                    r.resource,
                    r.api_group
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Full profile of one tracked resource.
#[derive(Debug, Serialize)]
pub struct ProfileOutput {
    /// Resource being shown.
    pub name: TrackedResource,
    /// Its fixed profile.
    pub profile: &'static ResourceProfile,
}

impl FormattedOutput for ProfileOutput {
    fn format_text(&self) -> String {
        let p = self.profile;
        let mut lines = vec![
            format!("resource:   {}", self.name),
            format!("api group:  {}", p.api_group),
            format!("kind:       {}", p.resource),
            "predicates:".to_string(),
        ];
        lines.extend(p.extra_predicates.iter().map(|pred| format!("  {pred}")));
        lines.push("dedup fields:".to_string());
        lines.extend(p.dedup_fields.iter().map(|f| format!("  {f}")));
        lines.push("track fields:".to_string());
        for (name, enabled) in [
            ("event_subject", p.track.with_event_subject),
            ("event_verb", p.track.with_event_verb),
            ("namespace", p.track.with_namespace),
            ("userId", p.track.with_user_id),
        ] {
            lines.push(format!("  {name:<14}{}", if enabled { "on" } else { "off" }));
        }
        lines.push("properties:".to_string());
        lines.extend(p.properties.iter().map(|(name, field)| format!("  {name} <- {field}")));
        lines.join("\n")
    }
}
