use serde_json::Value;

use crate::model::CommandPath;

/// Selector of the observed configuration inside the observe response
///
/// The running configuration is the result of the last observe command.
pub const OBSERVED_ROOT: &str = ".result[-1]";

/// Key of the nested command container at every level
pub const CONTAINER_KEY: &str = "cmds";

/// Presence of one leaf key below a chain of command containers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceTest {
    /// Container segments, outermost first
    pub containers: Vec<String>,
    /// Key tested for in the innermost container
    pub key: String,
}

impl PresenceTest {
    pub fn for_path(path: &CommandPath) -> Self {
        Self {
            containers: path.containers().to_vec(),
            key: path.leaf().to_string(),
        }
    }

    fn render(&self) -> String {
        let mut out = String::from(OBSERVED_ROOT);
        for segment in &self.containers {
            out.push('.');
            out.push_str(CONTAINER_KEY);
            out.push('[');
            out.push_str(&quote(segment));
            out.push(']');
        }
        out.push('.');
        out.push_str(CONTAINER_KEY);
        out.push_str(" | has(");
        out.push_str(&quote(&self.key));
        out.push(')');
        out
    }
}

/// Predicate expression tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// The observe response carries no protocol-level error
    ErrorIsNull,
    Presence(PresenceTest),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn not(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    /// Render to jq syntax
    pub fn render(&self) -> String {
        match self {
            Expr::ErrorIsNull => ".error == null".to_string(),
            Expr::Presence(test) => test.render(),
            Expr::Not(inner) => format!("{} | not", inner.render()),
            Expr::And(left, right) => format!("{} and {}", left.operand(), right.operand()),
        }
    }

    // Pipelines bind looser than `and` in jq and must be grouped
    fn operand(&self) -> String {
        match self {
            Expr::Presence(_) | Expr::Not(_) => format!("({})", self.render()),
            Expr::ErrorIsNull | Expr::And(..) => self.render(),
        }
    }
}

/// Quote a segment as a jq string literal
///
/// jq string literals are JSON strings, so JSON escaping makes arbitrary
/// segment text inert (a `\(` interpolation becomes `\\(`).
fn quote(segment: &str) -> String {
    Value::String(segment.to_string()).to_string()
}
