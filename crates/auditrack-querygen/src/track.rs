//! Track event shaping stage.

use serde::Serialize;

use crate::fields::{
    AUDIT_ID, EXCLUDE_FIELDS_CMD, INCLUDE_FIELDS_CMD, NAMESPACE, REQUEST_RECEIVED_TIMESTAMP,
    RESOURCE, STAGE_SEPARATOR, USER_ID_EXPR, VERB,
};
use crate::properties::PropertiesMap;

/// Optional fields of the track event.
///
/// The switches are independent; callers spell out all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TrackFieldSpec {
    /// Emit `userId` from the impersonated or authenticated user.
    pub with_user_id: bool,
    /// Emit `namespace` from the object reference.
    pub with_namespace: bool,
    /// Emit `event_verb` from the request verb.
    pub with_event_verb: bool,
    /// Emit `event_subject` from the resource kind.
    pub with_event_subject: bool,
}

impl TrackFieldSpec {
    /// Field assignments of the `eval` stage, in output order.
    fn assignments(&self, properties: &PropertiesMap) -> Vec<String> {
        let mut out = Vec::with_capacity(8);
        if self.with_event_subject {
            out.push(field_ref("event_subject", RESOURCE));
        }
        if self.with_event_verb {
            out.push(field_ref("event_verb", VERB));
        }
        out.push(field_ref("messageId", AUDIT_ID));
        if self.with_namespace {
            out.push(field_ref("namespace", NAMESPACE));
        }
        out.push(field_ref("timestamp", REQUEST_RECEIVED_TIMESTAMP));
        out.push(r#"type="track""#.to_string());
        if self.with_user_id {
            out.push(format!("userId={USER_ID_EXPR}"));
        }
        out.push(format!("properties={}", properties.json_object_expr()));
        out
    }
}

fn field_ref(name: &str, field: &str) -> String {
    format!("{name}='{field}'")
}

/// Render the `eval` stage that turns an audit record into a track event,
/// followed by the include and exclude field stages.
pub fn track_fields_stage(spec: TrackFieldSpec, properties: &PropertiesMap) -> String {
    format!(
        "eval {}{sep}{INCLUDE_FIELDS_CMD}{sep}{EXCLUDE_FIELDS_CMD}",
        spec.assignments(properties).join(","),
        sep = STAGE_SEPARATOR,
    )
}
