//! Presence predicates over the observed running configuration
//!
//! Each leaf gets two predicates: one that holds once the leaf is applied
//! and one that holds once it is removed. Both are built as [`Expr`] trees
//! and rendered to jq syntax only at the edge, so the pair can be compared
//! and evaluated structurally.

pub mod eval;
pub mod expr;

pub use expr::{Expr, PresenceTest, OBSERVED_ROOT};

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::model::CommandPath;

/// A boolean check over an observed-state document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    expr: Expr,
}

impl Predicate {
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Render to jq syntax
    pub fn render(&self) -> String {
        self.expr.render()
    }

    /// Evaluate against an observed document
    ///
    /// `None` means the document does not decide the question (for example
    /// a navigated container is missing).
    pub fn evaluate(&self, observed: &Value) -> Option<bool> {
        eval::evaluate(&self.expr, observed)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

/// The two predicates compiled for one leaf path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicatePair {
    pub expected_after_apply: Predicate,
    pub expected_after_remove: Predicate,
}

/// Compile the apply/remove predicates of `path`
///
/// Both share the `.error == null` guard. The presence test navigates the
/// `cmds` containers of every segment but the last and checks for the last
/// segment as a key; the remove predicate negates that test.
pub fn compile_predicates(path: &CommandPath) -> PredicatePair {
    let presence = Expr::Presence(PresenceTest::for_path(path));

    PredicatePair {
        expected_after_apply: Predicate::new(Expr::and(Expr::ErrorIsNull, presence.clone())),
        expected_after_remove: Predicate::new(Expr::and(Expr::ErrorIsNull, Expr::not(presence))),
    }
}
