//! Path splitting
//!
//! Turns a path string into the ordered segments used for traversal.

use crate::error::PathError;
use crate::storage::validation::{ADJACENT_SEPARATORS, SEPARATOR};

/// Splits a path into its `/`-delimited segments.
///
/// An empty path yields no segments and a single trailing separator is
/// ignored. A leading separator or two adjacent separators are rejected, so
/// no returned segment is ever empty. `..` is returned as-is; it is resolved
/// during traversal.
pub fn split_path(path: &str) -> Result<Vec<String>, PathError> {
    if path.is_empty() {
        return Ok(Vec::new());
    }

    if path.starts_with(SEPARATOR) {
        return Err(PathError::LeadingSeparator(path.to_string()));
    }

    if path.contains(ADJACENT_SEPARATORS) {
        return Err(PathError::AdjacentSeparators(path.to_string()));
    }

    let trimmed = path.strip_suffix(SEPARATOR).unwrap_or(path);
    Ok(trimmed.split(SEPARATOR).map(str::to_string).collect())
}
