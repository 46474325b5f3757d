//! Declarative command resource
//!
//! The caller's resource names the target device, the desired command tree
//! and the removal mode:
//!
//! ```yaml
//! apiVersion: eos.netclab.dev/v1alpha1
//! kind: EosCommand
//! metadata:
//!   name: eoscommand-1
//! spec:
//!   endpoint: ceos01.default.svc.cluster.local
//!   removeContainer: false
//!   cmds:
//!     ip prefix-list PL-Loopback0:
//!       seq 10 permit 10.0.0.1/32 eq 32: {}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{CompileError, Result};
use crate::model::CommandTree;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResource {
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    pub metadata: ResourceMetadata,
    pub spec: CommandResourceSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceMetadata {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResourceSpec {
    /// Host name of the managed device
    pub endpoint: String,
    /// Nested command tree, validated by [`CommandResource::command_tree`]
    #[serde(default = "empty_mapping")]
    pub cmds: Value,
    /// Undo a nested leaf by removing its whole top-level container
    #[serde(default)]
    pub remove_container: bool,
}

fn empty_mapping() -> Value {
    Value::Object(serde_json::Map::new())
}

impl CommandResource {
    /// Decode a resource from JSON
    ///
    /// # Errors
    /// * `ResourceDecode` - If the document does not match the resource shape
    /// * `MissingField` - If `metadata.name` or `spec.endpoint` is empty
    pub fn from_json_str(content: &str) -> Result<Self> {
        let resource: Self =
            serde_json::from_str(content).map_err(|e| CompileError::ResourceDecode {
                message: e.to_string(),
            })?;
        resource.validate()?;
        Ok(resource)
    }

    /// Decode a resource from YAML
    ///
    /// # Errors
    /// * `ResourceDecode` - If the document does not match the resource shape
    /// * `MissingField` - If `metadata.name` or `spec.endpoint` is empty
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let resource: Self = serde_yaml::from_str(content)?;
        resource.validate()?;
        Ok(resource)
    }

    /// Namespace prefix for derived identifiers
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Decode `spec.cmds` into a command tree
    ///
    /// # Errors
    /// * `MalformedRoot` / `MalformedNode` - If any node is not a mapping
    pub fn command_tree(&self) -> Result<CommandTree> {
        CommandTree::from_value(&self.spec.cmds)
    }

    fn validate(&self) -> Result<()> {
        if self.metadata.name.trim().is_empty() {
            return Err(CompileError::MissingField {
                field: "metadata.name".to_string(),
            });
        }
        if self.spec.endpoint.trim().is_empty() {
            return Err(CompileError::MissingField {
                field: "spec.endpoint".to_string(),
            });
        }
        Ok(())
    }
}
