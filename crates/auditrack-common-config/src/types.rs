//! Configuration types.

use auditrack_querygen::TrackedResource;
use serde::{Deserialize, Serialize};

/// Index searched when neither the command line nor the config file names one.
pub const DEFAULT_INDEX: &str = "federated:rh_konflux_audit";

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditrackConfig {
    /// Search backend settings.
    pub search: SearchConfig,
    /// Resources generated by `auditrack all`, in output order.
    pub resources: Vec<TrackedResource>,
}

impl Default for AuditrackConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            resources: TrackedResource::all().collect(),
        }
    }
}

/// Search backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Index holding the Kubernetes audit records.
    pub index: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX.to_string(),
        }
    }
}
