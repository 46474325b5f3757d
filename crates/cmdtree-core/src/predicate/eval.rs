//! In-process evaluation of predicate expressions
//!
//! Mirrors jq semantics for the subset the compiler emits. Where jq would
//! raise an error (testing keys on a missing container) the result is
//! `None`: the document does not decide the predicate yet.

use serde_json::Value;

use super::expr::{Expr, PresenceTest, CONTAINER_KEY};

/// Evaluate `expr` against an observed document
pub fn evaluate(expr: &Expr, observed: &Value) -> Option<bool> {
    match expr {
        Expr::ErrorIsNull => Some(observed.get("error").map_or(true, Value::is_null)),
        Expr::Presence(test) => presence(test, observed),
        Expr::Not(inner) => evaluate(inner, observed).map(|v| !v),
        Expr::And(left, right) => match evaluate(left, observed)? {
            false => Some(false),
            true => evaluate(right, observed),
        },
    }
}

fn presence(test: &PresenceTest, observed: &Value) -> Option<bool> {
    let mut current = observed_root(observed)?;

    for segment in &test.containers {
        current = current.get(CONTAINER_KEY)?.get(segment)?;
    }

    let container = current.get(CONTAINER_KEY)?.as_object()?;
    Some(container.contains_key(&test.key))
}

// `.result[-1]`
fn observed_root(observed: &Value) -> Option<&Value> {
    observed.get("result")?.as_array()?.last()
}
