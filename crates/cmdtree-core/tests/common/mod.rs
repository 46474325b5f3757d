use cmdtree_core::{CommandBatch, CommandPath, ConnectionConfig, EnvironmentDoc, Protocol};
use serde_json::json;
use std::sync::Arc;

/// Build a path from string slices
#[allow(dead_code)]
pub fn path(segments: &[&str]) -> CommandPath {
    CommandPath::new(segments.iter().copied()).unwrap()
}

/// Connection settings of the lab device used across scenarios
#[allow(dead_code)]
pub fn lab_config() -> ConnectionConfig {
    let env: EnvironmentDoc = serde_json::from_value(json!({
        "restconf": {"scheme": "https", "port": 6020},
        "jsonrpc": {"scheme": "http", "port": 6021}
    }))
    .unwrap();
    ConnectionConfig::resolve(
        "ceos01.default.svc.cluster.local",
        Some(&env),
        None,
        Protocol::JsonRpc,
    )
}

#[allow(dead_code)]
pub fn observe() -> Arc<CommandBatch> {
    Arc::new(CommandBatch::default_observe())
}
