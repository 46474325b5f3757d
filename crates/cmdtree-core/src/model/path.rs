use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{CompileError, Result};

/// CommandPath - ordered segments from the tree root down to one leaf
///
/// A path is never empty; the only constructor checks it. Ordering is
/// lexicographic over segments, which is the total order used to sort the
/// compiler's output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CommandPath(Vec<String>);

impl CommandPath {
    /// Build a path from its segments
    ///
    /// # Errors
    /// * `EmptyPath` - If `segments` is empty
    pub fn new<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(CompileError::EmptyPath {
                op: "CommandPath::new".to_string(),
            });
        }
        Ok(Self(segments))
    }

    /// Wrap segments the caller already knows to be non-empty
    pub(crate) fn from_nonempty(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty(), "command path must not be empty");
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// First (top-level container) segment
    pub fn head(&self) -> &str {
        &self.0[0]
    }

    /// Final (leaf) segment
    pub fn leaf(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// Every segment except the leaf
    pub fn containers(&self) -> &[String] {
        &self.0[..self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Join segments with `sep`
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl TryFrom<Vec<String>> for CommandPath {
    type Error = CompileError;

    fn try_from(segments: Vec<String>) -> Result<Self> {
        Self::new(segments)
    }
}

impl From<CommandPath> for Vec<String> {
    fn from(path: CommandPath) -> Self {
        path.0
    }
}

impl<'a> IntoIterator for &'a CommandPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CommandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" > "))
    }
}
