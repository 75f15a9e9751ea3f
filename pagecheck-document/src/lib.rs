//! # pagecheck-document
//!
//! The fixture HTML page and its structural checks.
//!
//! The page is a captured constant ([`SAMPLE_PAGE`]); the checks are
//! substring assertions over it — font-stack entries, required elements,
//! and size/tag-count metrics. Each check takes the document as an
//! argument, so any capture can be validated the same way.
//!
//! ## Example
//!
//! ```
//! use pagecheck_document::{elements, fonts, metrics, SAMPLE_PAGE};
//!
//! elements::check_all(SAMPLE_PAGE).unwrap();
//! fonts::reject_serif(SAMPLE_PAGE).unwrap();
//! assert_eq!(metrics::character_count(SAMPLE_PAGE).unwrap(), 1114);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod elements;
pub mod error;
pub mod fixture;
pub mod fonts;
pub mod metrics;

// Re-exports
pub use error::{DocumentError, DocumentResult};
pub use fixture::SAMPLE_PAGE;

/// Run the full document validation: every element check, the serif
/// rejection, and the character-count pin.
pub fn validate(document: &str) -> DocumentResult<()> {
    elements::check_all(document)?;
    fonts::reject_serif(document)?;
    metrics::character_count(document)?;
    Ok(())
}
