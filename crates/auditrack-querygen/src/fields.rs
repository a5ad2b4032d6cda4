//! Audit record field paths and fixed query fragments.

/// Separator between query stages.
pub const STAGE_SEPARATOR: &str = "|";

/// API group of the request target.
pub const API_GROUP: &str = "objectRef.apiGroup";
/// API version of the request target.
pub const API_VERSION: &str = "objectRef.apiVersion";
/// Plural resource name, e.g. `pipelineruns`.
pub const RESOURCE: &str = "objectRef.resource";
/// Name of the target object.
pub const NAME: &str = "objectRef.name";
/// Namespace of the target object.
pub const NAMESPACE: &str = "objectRef.namespace";
/// Kubernetes API verb.
pub const VERB: &str = "verb";
/// Unique id of the audit record.
pub const AUDIT_ID: &str = "auditID";
/// When the API server received the request.
pub const REQUEST_RECEIVED_TIMESTAMP: &str = "requestReceivedTimestamp";
/// User the request impersonated, if any.
pub const IMPERSONATED_USERNAME: &str = "impersonatedUser.username";
/// Authenticated user.
pub const USERNAME: &str = "user.username";
/// HTTP status of the API response.
pub const RESPONSE_STATUS_CODE: &str = "responseStatus.code";
/// Set only when the response carries the created object.
pub const RESPONSE_RESOURCE_VERSION: &str = "responseObject.metadata.resourceVersion";

/// Owning application label on the created object.
pub const APPLICATION_LABEL: &str =
    "responseObject.metadata.labels.appstudio.openshift.io/application";
/// Owning component label on the created object.
pub const COMPONENT_LABEL: &str =
    "responseObject.metadata.labels.appstudio.openshift.io/component";
/// Pipeline type label; `build` for build pipelines.
pub const PIPELINE_TYPE_LABEL: &str =
    "responseObject.metadata.labels.pipelines.appstudio.openshift.io/type";

/// Resolves to the impersonated user when present, else the authenticated user.
pub const USER_ID_EXPR: &str = "coalesce('impersonatedUser.username','user.username')";

/// Keeps only the track event fields.
pub const INCLUDE_FIELDS_CMD: &str =
    "fields event_subject,event_verb,messageId,namespace,timestamp,type,userId,properties";

/// Drops the backend's internal fields (`_raw`, `_time`, ...).
pub const EXCLUDE_FIELDS_CMD: &str = "fields - _*";
