//! Identifier-level diff between two compilations
//!
//! Because identifiers are stable, the difference between two runs tells a
//! host which managed units to create and which to delete.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::assemble::Compilation;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationDiff {
    /// Present only in the newer compilation
    pub added: Vec<String>,
    /// Present only in the older compilation
    pub removed: Vec<String>,
    /// Present in both
    pub retained: Vec<String>,
}

impl CompilationDiff {
    /// True when both sides manage the same units
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Diff two identifier sets; all lists come back sorted
pub fn diff_ids<P, N>(previous: P, next: N) -> CompilationDiff
where
    P: IntoIterator,
    P::Item: Into<String>,
    N: IntoIterator,
    N::Item: Into<String>,
{
    let previous: BTreeSet<String> = previous.into_iter().map(Into::into).collect();
    let next: BTreeSet<String> = next.into_iter().map(Into::into).collect();

    CompilationDiff {
        added: next.difference(&previous).cloned().collect(),
        removed: previous.difference(&next).cloned().collect(),
        retained: previous.intersection(&next).cloned().collect(),
    }
}

/// Diff two compilations by descriptor identifier
pub fn diff_compilations(previous: &Compilation, next: &Compilation) -> CompilationDiff {
    diff_ids(previous.ids(), next.ids())
}
