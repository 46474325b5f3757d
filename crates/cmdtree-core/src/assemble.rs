use cmdtree_core_types::RequestContext;
use serde::Serialize;
use std::sync::Arc;

use crate::config::ConnectionConfig;
use crate::digest::compute_compilation_digest;
use crate::errors::Result;
use crate::identity::derive_name;
use crate::inverse::invert;
use crate::model::{CommandBatch, CommandTree, ConnectionTarget, OperationDescriptor};
use crate::predicate::compile_predicates;
use crate::resource::CommandResource;
use crate::traversal::walk;
use crate::{log_op_end, log_op_error, log_op_start};

/// Output of one compilation run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Compilation {
    /// Name prefix the identifiers were derived under
    pub name: String,
    /// SHA256 over the compiled operations, see [`compute_compilation_digest`]
    pub digest: String,
    /// Descriptors in ascending path order
    pub descriptors: Vec<OperationDescriptor>,
}

impl Compilation {
    pub fn ids(&self) -> Vec<String> {
        self.descriptors.iter().map(|d| d.id.clone()).collect()
    }
}

/// Assemble one operation descriptor per leaf of `tree`
///
/// Leaf paths are sorted segment-wise, so output order does not depend on
/// traversal order. Every descriptor shares `observe`.
///
/// # Arguments
/// * `tree` - Desired configuration
/// * `cfg` - Connection settings interpolated into each target
/// * `name_prefix` - Namespace for derived identifiers
/// * `remove_container` - Undo nested leaves by removing their top-level container
/// * `observe` - Observe batch shared by all descriptors
///
/// # Returns
/// Descriptors in ascending path order; empty for an empty tree
pub fn assemble(
    tree: &CommandTree,
    cfg: &ConnectionConfig,
    name_prefix: &str,
    remove_container: bool,
    observe: Arc<CommandBatch>,
) -> Vec<OperationDescriptor> {
    let mut paths = walk(tree);
    paths.sort();

    let target = ConnectionTarget::from(cfg);

    paths
        .into_iter()
        .map(|path| {
            let inverted = invert(&path, remove_container);
            let predicates = compile_predicates(&path);

            OperationDescriptor {
                id: derive_name(name_prefix, &path),
                target: target.clone(),
                create: CommandBatch::in_config_context(&path),
                observe: Arc::clone(&observe),
                remove: CommandBatch::in_config_context(&inverted),
                expected_after_apply: predicates.expected_after_apply,
                expected_after_remove: predicates.expected_after_remove,
                path,
            }
        })
        .collect()
}

/// Compile a command resource
///
/// Decodes `spec.cmds`, assembles descriptors under `metadata.name` and
/// digests the result. Either every descriptor is produced or the call fails.
///
/// # Errors
/// * `MalformedRoot` / `MalformedNode` - If `spec.cmds` is not a mapping tree
/// * `Serialization` - If the digest input cannot be serialized
pub fn compile(
    resource: &CommandResource,
    cfg: &ConnectionConfig,
    observe: Arc<CommandBatch>,
    ctx: &RequestContext,
) -> Result<Compilation> {
    log_op_start!(
        "compile",
        request_id = ctx.request_id.as_str(),
        name_prefix = resource.name(),
        remove_container = resource.spec.remove_container
    );
    let start = std::time::Instant::now();

    let result = compile_impl(resource, cfg, observe).map_err(|e| {
        log_op_error!(
            "compile",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = ctx.request_id.as_str()
        );
        e
    })?;

    log_op_end!(
        "compile",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = ctx.request_id.as_str(),
        descriptor_count = result.descriptors.len() as u64
    );

    Ok(result)
}

fn compile_impl(
    resource: &CommandResource,
    cfg: &ConnectionConfig,
    observe: Arc<CommandBatch>,
) -> Result<Compilation> {
    let tree = resource.command_tree()?;

    let descriptors = assemble(
        &tree,
        cfg,
        resource.name(),
        resource.spec.remove_container,
        observe,
    );
    tracing::debug!(
        name_prefix = resource.name(),
        descriptor_count = descriptors.len() as u64,
        "assembled operation descriptors"
    );

    let digest = compute_compilation_digest(&descriptors)?;

    Ok(Compilation {
        name: resource.name().to_string(),
        digest,
        descriptors,
    })
}
