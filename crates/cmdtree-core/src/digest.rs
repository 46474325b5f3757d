//! Digest of a compilation's output
//!
//! Lets a host skip re-applying descriptors when recompiling unchanged
//! input. The digest covers what an executor acts on: identifier, create
//! batch and remove batch, in output order. Connection targets and
//! credentials are excluded so rotating a secret does not change it.

use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::model::OperationDescriptor;

/// Compute the digest of compiled descriptors
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
///
/// ## Errors
///
/// Returns `CompileError::Serialization` if JSON serialization fails.
pub fn compute_compilation_digest(descriptors: &[OperationDescriptor]) -> Result<String> {
    let canonical: Vec<_> = descriptors
        .iter()
        .map(|d| (&d.id, d.create.commands(), d.remove.commands()))
        .collect();
    let encoded = serde_json::to_string(&canonical)?;
    Ok(hash_string(&encoded))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
