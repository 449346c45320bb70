//! Placeholder resolution.

use super::parser::{Segment, parse};
use crate::vars::Vars;
use std::borrow::Cow;

/// Replace every placeholder in `src` with its value from `vars`.
///
/// A name present in `vars` wins even when its value is empty; the default
/// clause applies only to absent names, and a bare `${NAME}` with no value
/// becomes the empty string. Replacement text is never re-scanned.
pub fn resolve(src: &str, vars: &impl Vars) -> String {
    let segments = parse(src);

    // One lookup per placeholder; the values are reused for sizing and output.
    let pieces: Vec<Cow<'_, str>> = segments
        .iter()
        .map(|seg| match *seg {
            Segment::Lit(t) => Cow::Borrowed(t),
            Segment::Var { name, default } => match vars.lookup(name) {
                Some(v) => Cow::Owned(v.into_owned()),
                None => Cow::Borrowed(default.unwrap_or("")),
            },
        })
        .collect();

    tracing::debug!(
        placeholders = segments.iter().filter(|s| matches!(s, Segment::Var { .. })).count(),
        "resolved template"
    );

    let capacity = pieces.iter().map(|p| p.len()).sum();
    let mut out = String::with_capacity(capacity);
    for piece in &pieces {
        out.push_str(piece);
    }
    out
}
