//! Construction-time settings for a [`Graph`](crate::graph::Graph).

use serde::Serialize;

/// What `add_vertex` does when the key is already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateVertexPolicy {
    /// Fail with `GraphError::DuplicateVertex`.
    #[default]
    Reject,
    /// Replace the registered vertex with a fresh one that has no neighbors.
    /// Its edges are dropped from both endpoints and uncounted.
    Replace,
}

impl DuplicateVertexPolicy {
    /// Parse from a name string.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "reject" => Some(Self::Reject),
            "replace" => Some(Self::Replace),
            _ => None,
        }
    }

    /// Get the name string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Replace => "replace",
        }
    }
}

/// Graph configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphConfig {
    /// Policy for re-registering an existing key.
    pub duplicate_vertices: DuplicateVertexPolicy,
}

impl GraphConfig {
    /// Config with the given duplicate-vertex policy.
    pub fn with_duplicate_policy(policy: DuplicateVertexPolicy) -> Self {
        Self {
            duplicate_vertices: policy,
        }
    }
}
