//! Undo-path derivation
//!
//! Negation follows the CLI convention: re-enter every context segment and
//! negate the deepest one. Segments already negated are un-negated.

use crate::model::CommandPath;

/// Prefix that negates a command
pub const NEGATION_PREFIX: &str = "no ";

/// Toggle the negation prefix of one segment
///
/// `toggle("no X") == "X"` and `toggle("X") == "no X"`. Applying it twice
/// returns the input for every segment that does not start with `"no no "`;
/// a doubly negated segment loses both prefixes.
pub fn toggle(segment: &str) -> String {
    match segment.strip_prefix(NEGATION_PREFIX) {
        Some(rest) => rest.to_string(),
        None => format!("{}{}", NEGATION_PREFIX, segment),
    }
}

/// Compute the command path that undoes `path`
///
/// * `remove_container` with more than one segment: a single
///   `"no " + path[0]` removes the whole top-level container.
/// * More than one segment otherwise: the first segment stays, every later
///   segment is toggled.
/// * One segment: that segment is toggled, whatever `remove_container` says.
///
/// Container removal is not self-inverse: inverting its result yields the
/// bare container, not the original leaf.
pub fn invert(path: &CommandPath, remove_container: bool) -> CommandPath {
    let segments = path.segments();

    let inverted: Vec<String> = if segments.len() > 1 {
        if remove_container {
            vec![format!("{}{}", NEGATION_PREFIX, segments[0])]
        } else {
            std::iter::once(segments[0].clone())
                .chain(segments[1..].iter().map(|s| toggle(s)))
                .collect()
        }
    } else {
        vec![toggle(&segments[0])]
    };

    CommandPath::from_nonempty(inverted)
}
