//! Sensitive data marker for automatic redaction
//!
//! The `Sensitive<T>` wrapper keeps credentials out of logs, debug output and
//! serialized descriptors.

use serde::{Serialize, Serializer};
use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Wrapper for sensitive data that redacts itself in Debug, Display and
/// Serialize
///
/// # Example
///
/// ```
/// use cmdtree_core_types::Sensitive;
///
/// let credential = Sensitive::new("YXJpc3RhOmFyaXN0YQ==");
/// println!("{:?}", credential); // Prints: ***REDACTED***
///
/// assert_eq!(credential.expose(), &"YXJpc3RhOmFyaXN0YQ==");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    ///
    /// Use this only where the value must leave the process, such as when an
    /// executor builds an Authorization header.
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

impl<T> Serialize for Sensitive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: PartialEq> PartialEq for Sensitive<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Sensitive<T> {}

impl<T: Default> Default for Sensitive<T> {
    fn default() -> Self {
        Self(T::default())
    }
}
