//! Compile command
//!
//! Usage: cmdtree compile --resource <FILE> [--environment <FILE>] [--secret <FILE>]

use clap::{Args, ValueEnum};
use cmdtree_core::{compile, CommandBatch, ConnectionConfig, EnvironmentDoc, Protocol, SecretDoc};
use cmdtree_core_types::RequestContext;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

use super::{read_document, read_resource};

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Command resource (YAML, or JSON with a .json extension)
    #[arg(short, long)]
    pub resource: PathBuf,

    /// Environment document with per-protocol scheme and port
    #[arg(short, long)]
    pub environment: Option<PathBuf>,

    /// Secret document carrying `basicAuth`
    #[arg(short, long)]
    pub secret: Option<PathBuf>,

    /// Environment section to connect with
    #[arg(long, value_enum, default_value_t = ProtocolArg::Jsonrpc)]
    pub protocol: ProtocolArg,

    /// Observe command; repeat to build a batch (default: enable, show running-config)
    #[arg(long = "observe")]
    pub observe: Vec<String>,

    /// Host request tag used to correlate log lines
    #[arg(long)]
    pub request_id: Option<String>,

    /// Write the basic-auth credential into each descriptor's target.
    /// Without this flag the credential is redacted and executors reading
    /// the output must supply their own.
    #[arg(long)]
    pub emit_credential: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProtocolArg {
    Jsonrpc,
    Restconf,
}

impl From<ProtocolArg> for Protocol {
    fn from(arg: ProtocolArg) -> Self {
        match arg {
            ProtocolArg::Jsonrpc => Protocol::JsonRpc,
            ProtocolArg::Restconf => Protocol::Restconf,
        }
    }
}

/// Execute compile command
pub fn execute(args: CompileArgs) -> Result<(), Box<dyn std::error::Error>> {
    let resource = read_resource(&args.resource)?;

    let environment: Option<EnvironmentDoc> = match &args.environment {
        Some(path) => Some(read_document(path)?),
        None => None,
    };
    let secret: Option<SecretDoc> = match &args.secret {
        Some(path) => Some(read_document(path)?),
        None => None,
    };

    let cfg = ConnectionConfig::resolve(
        &resource.spec.endpoint,
        environment.as_ref(),
        secret.as_ref(),
        args.protocol.into(),
    );

    let observe = if args.observe.is_empty() {
        CommandBatch::default_observe()
    } else {
        CommandBatch::new(args.observe)
    };

    let ctx = RequestContext::from_tag(args.request_id.as_deref());
    let compilation = compile(&resource, &cfg, Arc::new(observe), &ctx)?;

    let mut document = serde_json::to_value(&compilation)?;
    if args.emit_credential {
        tracing::warn!("writing basic-auth credential into compilation output");
        reveal_credential(&mut document, cfg.credential.expose());
    }
    let rendered = serde_json::to_string_pretty(&document)?;

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, rendered)?;
        tracing::info!(
            path = %output_path.display(),
            descriptor_count = compilation.descriptors.len() as u64,
            "wrote compilation"
        );
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn reveal_credential(document: &mut Value, credential: &str) {
    let Some(descriptors) = document
        .get_mut("descriptors")
        .and_then(Value::as_array_mut)
    else {
        return;
    };

    for descriptor in descriptors {
        if let Some(target) = descriptor.get_mut("target").and_then(Value::as_object_mut) {
            target.insert(
                "credential".to_string(),
                Value::String(credential.to_string()),
            );
        }
    }
}
