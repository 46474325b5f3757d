use cmdtree_core_types::Sensitive;
use serde::Serialize;
use std::sync::Arc;

use super::batch::CommandBatch;
use super::path::CommandPath;
use crate::config::ConnectionConfig;
use crate::predicate::Predicate;

/// Address and credentials of the remote system, as seen by an executor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionTarget {
    pub base_url: String,
    pub insecure_skip_tls_verify: bool,
    /// Serialized redacted; executors read it through `expose()`
    pub credential: Sensitive<String>,
}

impl From<&ConnectionConfig> for ConnectionTarget {
    fn from(cfg: &ConnectionConfig) -> Self {
        Self {
            base_url: cfg.target_url(),
            insecure_skip_tls_verify: cfg.insecure_skip_tls_verify,
            credential: cfg.credential.clone(),
        }
    }
}

/// OperationDescriptor - how to create, verify and remove one leaf
///
/// Built fresh by every compilation and never mutated. The observe batch is
/// shared by all descriptors of one compilation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    /// Stable identifier, see [`crate::identity::derive_name`]
    pub id: String,

    /// Leaf path this descriptor manages
    pub path: CommandPath,

    pub target: ConnectionTarget,

    /// Configuration context followed by the leaf path
    pub create: CommandBatch,

    /// Reads back the running configuration
    pub observe: Arc<CommandBatch>,

    /// Configuration context followed by the inverted path
    pub remove: CommandBatch,

    /// Holds once `create` took effect
    pub expected_after_apply: Predicate,

    /// Holds once `remove` took effect
    pub expected_after_remove: Predicate,
}
