//! Font-family checks.
//!
//! The fixture stylesheet declares a specific system font stack; these
//! checks confirm each expected entry is present and that no bare serif
//! fallback sneaks in.

use crate::error::{DocumentError, DocumentResult};

/// Font-family entries the stylesheet is expected to declare, in stack
/// order. The trailing comma on `Helvetica,` keeps it from matching
/// `Helvetica Neue`.
pub const EXPECTED_FONTS: [&str; 9] = [
    "apple-system",
    "system-ui",
    "BlinkMacSystemFont",
    "Segoe UI",
    "Open Sans",
    "Helvetica Neue",
    "Helvetica,",
    "Arial",
    "sans-serif",
];

/// Whether the document declares the given font-family entry.
pub fn has_font(document: &str, font: &str) -> bool {
    document.contains(font)
}

/// Expected fonts the document does not declare.
pub fn missing_fonts(document: &str) -> Vec<&'static str> {
    EXPECTED_FONTS
        .iter()
        .copied()
        .filter(|font| !has_font(document, font))
        .collect()
}

/// Fail if the stylesheet falls back to a bare serif face.
///
/// `sans-serif` does not count; only a serif entry preceded by a space
/// (a standalone list member) trips this.
pub fn reject_serif(document: &str) -> DocumentResult<()> {
    if document.contains(" serif") {
        Err(DocumentError::SerifPresent)
    } else {
        Ok(())
    }
}
