//! Path segment sanitization for metadata fields

use std::path::is_separator;

/// Turn a free-text tag field into a single path segment
///
/// Only path separators are removed. Whitespace, punctuation, case and
/// non-ASCII characters are kept exactly as tagged.
pub fn sanitize_path_segment(field: &str) -> String {
    field.chars().filter(|c| !is_separator(*c)).collect()
}
