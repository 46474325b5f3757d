//! Connection configuration
//!
//! Resolved from three caller documents: the resource's endpoint host, an
//! environment document with per-protocol scheme and port, and an optional
//! secret carrying the basic-auth credential. Every missing piece falls back
//! to a documented default; nothing here fails.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cmdtree_core_types::Sensitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Secret data key holding the basic-auth credential
pub const BASIC_AUTH_KEY: &str = "basicAuth";

/// Management protocol whose environment section is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    JsonRpc,
    Restconf,
}

/// Per-protocol connection settings from the environment document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolSection {
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub base_path: Option<String>,
    #[serde(default)]
    pub insecure_skip_tls_verify: Option<bool>,
}

/// Environment document supplied by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentDoc {
    #[serde(default)]
    pub jsonrpc: Option<ProtocolSection>,
    #[serde(default)]
    pub restconf: Option<ProtocolSection>,
}

impl EnvironmentDoc {
    pub fn section(&self, protocol: Protocol) -> Option<&ProtocolSection> {
        match protocol {
            Protocol::JsonRpc => self.jsonrpc.as_ref(),
            Protocol::Restconf => self.restconf.as_ref(),
        }
    }
}

/// Secret document holding credentials
///
/// `data` values are already base64 encoded; `stringData` values are plain
/// and get encoded here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretDoc {
    #[serde(default)]
    pub data: BTreeMap<String, String>,
    #[serde(default)]
    pub string_data: BTreeMap<String, String>,
}

impl SecretDoc {
    /// Basic-auth credential in header form (base64 of `user:password`)
    pub fn basic_auth(&self) -> Option<String> {
        if let Some(encoded) = self.data.get(BASIC_AUTH_KEY) {
            return Some(encoded.clone());
        }
        self.string_data
            .get(BASIC_AUTH_KEY)
            .map(|plain| STANDARD.encode(plain.as_bytes()))
    }
}

/// Everything the compiler needs to address the remote system
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub scheme: String,
    pub base_path: String,
    pub credential: Sensitive<String>,
    pub insecure_skip_tls_verify: bool,
}

impl ConnectionConfig {
    /// Resolve connection settings for `host`
    ///
    /// Defaults: port `0`, scheme `""`, base path `""`, TLS verification
    /// skipped, empty credential.
    pub fn resolve(
        host: &str,
        environment: Option<&EnvironmentDoc>,
        secret: Option<&SecretDoc>,
        protocol: Protocol,
    ) -> Self {
        let section = environment.and_then(|env| env.section(protocol));
        if section.is_none() {
            tracing::debug!(
                protocol = ?protocol,
                "environment section missing, using connection defaults"
            );
        }
        let section = section.cloned().unwrap_or_default();

        let credential = secret.and_then(SecretDoc::basic_auth);
        if credential.is_none() {
            tracing::debug!("basic-auth credential missing, using empty credential");
        }

        Self {
            host: host.to_string(),
            port: section.port.unwrap_or(0),
            scheme: section.scheme.unwrap_or_default(),
            base_path: section.base_path.unwrap_or_default(),
            credential: Sensitive::new(credential.unwrap_or_default()),
            insecure_skip_tls_verify: section.insecure_skip_tls_verify.unwrap_or(true),
        }
    }

    /// `{scheme}://{host}:{port}{base_path}`
    pub fn target_url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.scheme, self.host, self.port, self.base_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn environment() -> EnvironmentDoc {
        serde_json::from_value(json!({
            "restconf": {"scheme": "https", "port": 6020},
            "jsonrpc": {"scheme": "http", "port": 6021}
        }))
        .unwrap()
    }

    #[test]
    fn test_resolve_jsonrpc_section() {
        let env = environment();
        let cfg = ConnectionConfig::resolve(
            "ceos01.default.svc.cluster.local",
            Some(&env),
            None,
            Protocol::JsonRpc,
        );

        assert_eq!(cfg.target_url(), "http://ceos01.default.svc.cluster.local:6021");
        assert!(cfg.insecure_skip_tls_verify);
    }

    #[test]
    fn test_resolve_restconf_section() {
        let env = environment();
        let cfg = ConnectionConfig::resolve("r1", Some(&env), None, Protocol::Restconf);
        assert_eq!(cfg.target_url(), "https://r1:6020");
    }

    #[test]
    fn test_missing_environment_defaults() {
        let cfg = ConnectionConfig::resolve("r1", None, None, Protocol::JsonRpc);

        assert_eq!(cfg.port, 0);
        assert_eq!(cfg.scheme, "");
        assert_eq!(cfg.base_path, "");
        assert!(cfg.insecure_skip_tls_verify);
        assert!(cfg.credential.expose().is_empty());
        assert_eq!(cfg.target_url(), "://r1:0");
    }

    #[test]
    fn test_explicit_tls_verification() {
        let env: EnvironmentDoc = serde_json::from_value(json!({
            "jsonrpc": {"scheme": "https", "port": 443, "basePath": "/command-api",
                        "insecureSkipTlsVerify": false}
        }))
        .unwrap();
        let cfg = ConnectionConfig::resolve("r1", Some(&env), None, Protocol::JsonRpc);

        assert!(!cfg.insecure_skip_tls_verify);
        assert_eq!(cfg.target_url(), "https://r1:443/command-api");
    }

    #[test]
    fn test_secret_data_used_verbatim() {
        let secret: SecretDoc =
            serde_json::from_value(json!({"data": {"basicAuth": "YXJpc3RhOmFyaXN0YQ=="}}))
                .unwrap();
        let cfg = ConnectionConfig::resolve("r1", None, Some(&secret), Protocol::JsonRpc);
        assert_eq!(cfg.credential.expose(), "YXJpc3RhOmFyaXN0YQ==");
    }

    #[test]
    fn test_secret_string_data_is_encoded() {
        let secret: SecretDoc =
            serde_json::from_value(json!({"stringData": {"basicAuth": "arista:arista"}})).unwrap();
        assert_eq!(secret.basic_auth().as_deref(), Some("YXJpc3RhOmFyaXN0YQ=="));
    }

    #[test]
    fn test_secret_without_credential_field() {
        let secret: SecretDoc =
            serde_json::from_value(json!({"data": {"token": "abc"}})).unwrap();
        let cfg = ConnectionConfig::resolve("r1", None, Some(&secret), Protocol::JsonRpc);
        assert_eq!(cfg.credential.expose(), "");
    }

    #[test]
    fn test_credential_redacted_in_debug() {
        let secret: SecretDoc =
            serde_json::from_value(json!({"data": {"basicAuth": "c2VjcmV0"}})).unwrap();
        let cfg = ConnectionConfig::resolve("r1", None, Some(&secret), Protocol::JsonRpc);
        assert!(!format!("{:?}", cfg).contains("c2VjcmV0"));
    }
}
