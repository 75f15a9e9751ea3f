//! Document validation error types.

use thiserror::Error;

/// A structural check the document failed.
///
/// The display strings match the messages the harness has always reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DocumentError {
    /// A bare serif fallback appears in the stylesheet.
    #[error("Contains serif!")]
    SerifPresent,

    /// No div element anywhere in the document.
    #[error("No div!")]
    MissingDiv,

    /// No h1 element.
    #[error("No h1!")]
    MissingH1,

    /// The h1 does not carry the expected heading text.
    #[error("Not correct text in h1!")]
    WrongH1Text,

    /// No paragraph element.
    #[error("No 'p' tag!")]
    MissingParagraph,

    /// The anchor is not nested directly inside a paragraph.
    #[error("Need 'a' tag in 'p' tag!")]
    MissingAnchorInParagraph,

    /// The reference link does not point at the IANA example page.
    #[error("Not correct wiki link in href!")]
    WrongReferenceLink,

    /// The link text is not the expected "More information..." line.
    #[error("Not correct 'More Info' text!")]
    WrongMoreInfoText,

    /// The title element is wrong or missing.
    #[error("Not correct title meta tag: Example Domain!")]
    WrongTitle,

    /// The viewport meta tag is wrong or missing.
    #[error("Not correct device scale=1 meta tag")]
    WrongViewportMeta,

    /// The document does not have the expected character count.
    #[error("Invalid character count")]
    InvalidCharacterCount,
}

/// Result type for document checks.
pub type DocumentResult<T> = Result<T, DocumentError>;
