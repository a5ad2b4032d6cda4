//! Full query composition.

use tracing::debug;

use crate::dedup::dedup_stage;
use crate::fields::{API_GROUP, RESOURCE, RESPONSE_STATUS_CODE, STAGE_SEPARATOR};
use crate::resource::{ResourceProfile, TrackedResource};
use crate::track::track_fields_stage;

impl ResourceProfile {
    /// Render the `search` stage selecting successful creations of this resource
    /// in `index`.
    pub fn search_stage(&self, index: &str) -> String {
        let mut predicates = vec![
            format!("index=\"{index}\""),
            "log_type=audit".to_string(),
            "verb=create".to_string(),
            format!("\"{RESPONSE_STATUS_CODE}\" IN (200, 201)"),
            format!("\"{API_GROUP}\"=\"{}\"", self.api_group),
            format!("\"{RESOURCE}\"=\"{}\"", self.resource),
        ];
        predicates.extend(self.extra_predicates.iter().map(|p| p.to_string()));
        format!("search {}", predicates.join(" "))
    }
}

/// Compose the complete query for `profile` against `index`.
pub fn build_query(index: &str, profile: &ResourceProfile) -> String {
    let stages = [
        profile.search_stage(index),
        dedup_stage(profile.dedup_fields),
        track_fields_stage(profile.track, &profile.properties_map()),
    ];
    let query = stages.join(STAGE_SEPARATOR);
    debug!(
        api_group = profile.api_group,
        resource = profile.resource,
        index,
        len = query.len(),
        "composed track query"
    );
    query
}

/// Query for created `Application` resources.
pub fn application_query(index: &str) -> String {
    TrackedResource::Application.query(index)
}

/// Query for created build `PipelineRun` resources.
pub fn pipeline_run_query(index: &str) -> String {
    TrackedResource::PipelineRun.query(index)
}

impl TrackedResource {
    /// Compose this resource's query against `index`.
    pub fn query(self, index: &str) -> String {
        build_query(index, self.profile())
    }
}
