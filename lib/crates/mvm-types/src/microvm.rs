//! MicroVM resource model as exchanged with the orchestration service.
//!
//! Only `uid`, `id` (the name) and `namespace` carry meaning for resolution.
//! Everything else in the spec and status is kept as an opaque JSON map so
//! that a spec read from disk reaches the service untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle state reported by the service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MicroVmState {
    #[default]
    Pending,
    Created,
    Failed,
    Deleting,
    Deleted,
}

impl MicroVmState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Created => "CREATED",
            Self::Failed => "FAILED",
            Self::Deleting => "DELETING",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for MicroVmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Desired configuration of a MicroVM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MicroVmSpec {
    /// User-chosen name. Not unique.
    #[serde(default)]
    pub id: String,
    /// User-chosen namespace. Not unique.
    #[serde(default)]
    pub namespace: String,
    /// Service-assigned identifier; `None` until creation succeeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// vcpu, memoryInMb, kernel, rootVolume, interfaces, metadata, ...
    #[serde(flatten)]
    pub config: Map<String, Value>,
}

impl MicroVmSpec {
    /// A spec carrying only its identity. The service fills in the rest.
    #[must_use]
    pub fn named(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            id: name.into(),
            namespace: namespace.into(),
            uid: None,
            config: Map::new(),
        }
    }
}

/// Observed status of a MicroVM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MicroVmStatus {
    #[serde(default)]
    pub state: MicroVmState,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// A MicroVM record: spec plus status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MicroVm {
    #[serde(default)]
    pub version: i32,
    pub spec: MicroVmSpec,
    #[serde(default)]
    pub status: MicroVmStatus,
}

impl MicroVm {
    /// Service-assigned identifier, if any.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.spec.uid.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.spec.id
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.spec.namespace
    }

    #[must_use]
    pub fn state(&self) -> MicroVmState {
        self.status.state
    }
}
