//! Stable identifiers for compiled operations
//!
//! Names must survive recompilation unchanged so the host keeps managing the
//! same unit for the same leaf. SHA-1 is used for collision resistance only.

use sha1::{Digest, Sha1};

use crate::model::CommandPath;

/// Joins path segments before hashing; never part of a command segment
pub const PATH_JOINER: &str = "|";

/// Separates the prefix from the hash fragment
pub const NAME_SEPARATOR: char = '-';

/// Hex characters of digest kept (40 bits)
pub const HASH_LEN: usize = 10;

/// Characters of the namespace prefix kept
pub const PREFIX_LEN: usize = 14;

/// Upper bound on identifier length
pub const MAX_NAME_LEN: usize = 63;

/// Hex fragment identifying `path`
pub fn path_hash(path: &CommandPath) -> String {
    let mut hasher = Sha1::new();
    hasher.update(path.join(PATH_JOINER).as_bytes());
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(HASH_LEN);
    digest
}

/// Derive the identifier of `path` under `prefix`
///
/// `<first 14 chars of prefix>-<10 hex chars>`, cut to 63 characters with
/// any trailing separator removed. An empty prefix yields the bare hash.
///
/// ## Example
///
/// ```
/// use cmdtree_core::identity::derive_name;
/// use cmdtree_core::model::CommandPath;
///
/// let path = CommandPath::new(["ip prefix-list PL-A", "seq 10 permit 10.0.0.1/32 eq 32"]).unwrap();
/// assert_eq!(derive_name("xr-1", &path), "xr-1-b1ed3974cd");
/// ```
pub fn derive_name(prefix: &str, path: &CommandPath) -> String {
    let hash = path_hash(path);
    let prefix: String = prefix.chars().take(PREFIX_LEN).collect();

    let name = if prefix.is_empty() {
        hash
    } else {
        format!("{}{}{}", prefix, NAME_SEPARATOR, hash)
    };

    let bounded: String = name.chars().take(MAX_NAME_LEN).collect();
    bounded.trim_end_matches(NAME_SEPARATOR).to_string()
}
