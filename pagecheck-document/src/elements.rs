//! Structural element checks.

use crate::error::{DocumentError, DocumentResult};

/// The heading the fixture page carries.
pub const EXPECTED_H1: &str = "<h1>Example Domain</h1>";

/// The reference link target.
pub const EXPECTED_HREF: &str = "href=https://www.iana.org/domains/example";

/// The link text, including the closing anchor.
pub const EXPECTED_MORE_INFO: &str = "More information...</a>";

/// The title element.
pub const EXPECTED_TITLE: &str = "<title>Example Domain</title>";

/// The viewport meta tag.
pub const EXPECTED_VIEWPORT_META: &str =
    "<meta name=viewport content=width=device-width, initial-scale=1";

fn require(document: &str, needle: &str, missing: DocumentError) -> DocumentResult<()> {
    if document.contains(needle) {
        Ok(())
    } else {
        Err(missing)
    }
}

/// The document contains a div.
pub fn check_div(document: &str) -> DocumentResult<()> {
    require(document, "div", DocumentError::MissingDiv)
}

/// The document contains an h1.
pub fn check_h1(document: &str) -> DocumentResult<()> {
    require(document, "h1", DocumentError::MissingH1)
}

/// The h1 carries the expected heading text.
pub fn check_h1_text(document: &str) -> DocumentResult<()> {
    require(document, EXPECTED_H1, DocumentError::WrongH1Text)
}

/// The document contains a paragraph.
pub fn check_paragraph(document: &str) -> DocumentResult<()> {
    require(document, "<p>", DocumentError::MissingParagraph)
}

/// An anchor opens directly inside a paragraph.
pub fn check_anchor_in_paragraph(document: &str) -> DocumentResult<()> {
    require(document, "<p><a", DocumentError::MissingAnchorInParagraph)
}

/// The reference link points at the IANA example page.
pub fn check_reference_link(document: &str) -> DocumentResult<()> {
    require(document, EXPECTED_HREF, DocumentError::WrongReferenceLink)
}

/// The link text reads "More information...".
pub fn check_more_info_text(document: &str) -> DocumentResult<()> {
    require(document, EXPECTED_MORE_INFO, DocumentError::WrongMoreInfoText)
}

/// The title element is present and correct.
pub fn check_title(document: &str) -> DocumentResult<()> {
    require(document, EXPECTED_TITLE, DocumentError::WrongTitle)
}

/// The viewport meta tag is present and correct.
pub fn check_viewport_meta(document: &str) -> DocumentResult<()> {
    require(
        document,
        EXPECTED_VIEWPORT_META,
        DocumentError::WrongViewportMeta,
    )
}

/// Run every element check, stopping at the first failure.
pub fn check_all(document: &str) -> DocumentResult<()> {
    check_div(document)?;
    check_h1(document)?;
    check_h1_text(document)?;
    check_paragraph(document)?;
    check_anchor_in_paragraph(document)?;
    check_reference_link(document)?;
    check_more_info_text(document)?;
    check_title(document)?;
    check_viewport_meta(document)?;
    Ok(())
}
