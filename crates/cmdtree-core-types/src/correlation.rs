//! Correlation types for request tracking
//!
//! The host that drives compilation usually has its own request tag (for
//! example the reconciliation tag of the calling controller). It is carried
//! through compilation so every log line of one run can be grouped.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a single compilation request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap a host-supplied tag
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through a compilation call for correlation
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
}

impl RequestContext {
    /// Create a new context with a fresh RequestId
    pub fn new() -> Self {
        Self {
            request_id: RequestId::new(),
        }
    }

    /// Create a context from an existing RequestId
    pub fn with_request_id(request_id: RequestId) -> Self {
        Self { request_id }
    }

    /// Create a context from the host's request tag, or a fresh id when the
    /// host has none
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if !tag.is_empty() => {
                Self::with_request_id(RequestId::from_string(tag.to_string()))
            }
            _ => Self::new(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
