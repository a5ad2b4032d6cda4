//! Search query generation for Kubernetes audit-log track events.
//!
//! Every function here is a pure string transformation: given an index name (and,
//! for the lower-level builders, field lists, property mappings and track switches)
//! it returns the text of a pipeline-delimited search query. Nothing is executed and
//! nothing is escaped; inputs are substituted verbatim.
//!
//! ```
//! use auditrack_querygen::TrackedResource;
//!
//! let query = TrackedResource::Application.query("audit");
//! assert!(query.starts_with("search index=\"audit\" log_type=audit"));
//! ```

pub mod dedup;
pub mod fields;
pub mod properties;
pub mod query;
pub mod resource;
pub mod track;

pub use dedup::dedup_stage;
pub use properties::PropertiesMap;
pub use query::{application_query, build_query, pipeline_run_query};
pub use resource::{ResourceProfile, TrackedResource};
pub use track::{track_fields_stage, TrackFieldSpec};
