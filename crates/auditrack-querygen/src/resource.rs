//! Tracked resource types and their fixed query profiles.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::fields::*;
use crate::properties::PropertiesMap;
use crate::track::TrackFieldSpec;

/// Kubernetes resource types whose creation is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumIter, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TrackedResource {
    /// `applications.appstudio.redhat.com`
    Application,
    /// `pipelineruns.tekton.dev`
    PipelineRun,
}

impl TrackedResource {
    /// Get all tracked resources.
    pub fn all() -> impl Iterator<Item = Self> {
        use strum::IntoEnumIterator;
        Self::iter()
    }

    /// The fixed query profile for this resource.
    pub fn profile(self) -> &'static ResourceProfile {
        match self {
            Self::Application => &APPLICATION,
            Self::PipelineRun => &PIPELINE_RUN,
        }
    }
}

/// Everything that distinguishes one tracked resource's query from another's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceProfile {
    /// Value matched against `objectRef.apiGroup`.
    pub api_group: &'static str,
    /// Value matched against `objectRef.resource`.
    pub resource: &'static str,
    /// Predicates appended to the search stage, in order.
    pub extra_predicates: &'static [&'static str],
    /// De-duplication keys.
    pub dedup_fields: &'static [&'static str],
    /// Optional track event fields to emit.
    pub track: TrackFieldSpec,
    /// `(property, field)` pairs of the event payload.
    #[serde(serialize_with = "serialize_properties")]
    pub properties: &'static [(&'static str, &'static str)],
}

impl ResourceProfile {
    /// The payload mapping as a [`PropertiesMap`].
    pub fn properties_map(&self) -> PropertiesMap {
        self.properties.iter().copied().collect()
    }
}

fn serialize_properties<S: serde::Serializer>(
    properties: &&'static [(&'static str, &'static str)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(properties.iter().copied())
}

static APPLICATION: ResourceProfile = ResourceProfile {
    api_group: "appstudio.redhat.com",
    resource: "applications",
    extra_predicates: &[
        r#"("impersonatedUser.username"="*" OR (user.username="*" AND NOT user.username="system:*"))"#,
        r#"(verb!=create OR "responseObject.metadata.resourceVersion"="*")"#,
    ],
    dedup_fields: &[
        API_GROUP,
        API_VERSION,
        RESOURCE,
        VERB,
        AUDIT_ID,
        NAME,
        REQUEST_RECEIVED_TIMESTAMP,
        IMPERSONATED_USERNAME,
        USERNAME,
    ],
    track: TrackFieldSpec {
        with_user_id: true,
        with_namespace: false,
        with_event_verb: true,
        with_event_subject: true,
    },
    properties: &[
        ("apiGroup", API_GROUP),
        ("apiVersion", API_VERSION),
        ("kind", RESOURCE),
        ("name", NAME),
    ],
};

static PIPELINE_RUN: ResourceProfile = ResourceProfile {
    api_group: "tekton.dev",
    resource: "pipelineruns",
    // One token: no space between the build label and resource version.
    extra_predicates: &[concat!(
        r#""responseObject.metadata.labels.pipelines.appstudio.openshift.io/type"=build"#,
        r#""responseObject.metadata.resourceVersion"="*""#,
    )],
    dedup_fields: &[
        API_GROUP,
        API_VERSION,
        APPLICATION_LABEL,
        COMPONENT_LABEL,
        RESOURCE,
        VERB,
        AUDIT_ID,
        NAMESPACE,
        REQUEST_RECEIVED_TIMESTAMP,
    ],
    track: TrackFieldSpec {
        with_user_id: false,
        with_namespace: true,
        with_event_verb: true,
        with_event_subject: true,
    },
    properties: &[
        ("apiGroup", API_GROUP),
        ("apiVersion", API_VERSION),
        ("application", APPLICATION_LABEL),
        ("component", COMPONENT_LABEL),
        ("kind", RESOURCE),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_names_round_trip() {
        assert_eq!(TrackedResource::Application.to_string(), "application");
        assert_eq!(TrackedResource::PipelineRun.to_string(), "pipeline-run");
        assert_eq!(
            TrackedResource::from_str("pipeline-run").unwrap(),
            TrackedResource::PipelineRun
        );
        assert!(TrackedResource::from_str("deployment").is_err());
    }

    #[test]
    fn test_all_lists_every_variant() {
        let all: Vec<_> = TrackedResource::all().collect();
        assert_eq!(all, vec![TrackedResource::Application, TrackedResource::PipelineRun]);
    }

    #[test]
    fn test_profiles_have_distinct_targets() {
        let app = TrackedResource::Application.profile();
        let plr = TrackedResource::PipelineRun.profile();
        assert_eq!((app.api_group, app.resource), ("appstudio.redhat.com", "applications"));
        assert_eq!((plr.api_group, plr.resource), ("tekton.dev", "pipelineruns"));
    }

    #[test]
    fn test_pipeline_run_extra_predicates_reference_known_fields() {
        let plr = TrackedResource::PipelineRun.profile();
        assert_eq!(plr.extra_predicates.len(), 1);
        assert_eq!(
            plr.extra_predicates[0],
            format!("\"{PIPELINE_TYPE_LABEL}\"=build\"{RESPONSE_RESOURCE_VERSION}\"=\"*\"")
        );
    }

    #[test]
    fn test_dedup_fields_have_no_duplicates() {
        for resource in TrackedResource::all() {
            let fields = resource.profile().dedup_fields;
            let unique: std::collections::HashSet<_> = fields.iter().collect();
            assert_eq!(unique.len(), fields.len(), "{resource}");
        }
    }

    #[test]
    fn test_properties_map_keeps_declared_order() {
        let props = TrackedResource::PipelineRun.profile().properties_map();
        let names: Vec<_> = props.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["apiGroup", "apiVersion", "application", "component", "kind"]);
    }

    #[test]
    fn test_profile_serializes_properties_as_object() {
        let json = serde_json::to_value(TrackedResource::Application.profile()).unwrap();
        assert_eq!(json["properties"]["kind"], "objectRef.resource");
        assert_eq!(json["track"]["with_user_id"], true);
        assert_eq!(json["dedup_fields"].as_array().unwrap().len(), 9);
    }
}
