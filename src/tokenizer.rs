//! Splitting of path strings into segments.

/// Splits `path` on `/` without any normalization.
///
/// Leading, trailing and doubled separators each produce an empty segment, and
/// the empty string yields a single empty segment. Discarding those is left to
/// the tree builder.
pub fn tokenize(path: &str) -> Vec<&str> {
    path.split('/').collect()
}
