pub mod compile;
pub mod diff;
pub mod paths;

use cmdtree_core::CommandResource;
use serde::de::DeserializeOwned;
use std::path::Path;

fn read(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Read a document; `.json` files as JSON, anything else as YAML
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let content = read(path)?;
    if is_json(path) {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(serde_yaml::from_str(&content)?)
    }
}

/// Read and validate a command resource
pub fn read_resource(path: &Path) -> Result<CommandResource, Box<dyn std::error::Error>> {
    let content = read(path)?;
    let resource = if is_json(path) {
        CommandResource::from_json_str(&content)?
    } else {
        CommandResource::from_yaml_str(&content)?
    };
    Ok(resource)
}
