//! Tag normalization.

/// Canonicalizes a raw tag string into a comparable token.
///
/// Lower-cases the input and drops every character outside `[a-z0-9:_-]`,
/// which also strips all whitespace. Total function with no failure mode,
/// and idempotent: normalizing an already-normalized string returns it
/// unchanged.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | ':' | '_' | '-'))
        .collect()
}
