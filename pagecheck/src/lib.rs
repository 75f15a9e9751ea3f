//! # pagecheck - Fixture Page Validation Harness
//!
//! pagecheck validates a captured HTML page against a fixed set of
//! structural expectations, and fetches live data through an HTTP client
//! whose responses are classified into accept / retry / reject with a
//! bounded retry budget per failure class.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pagecheck::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Validate the captured page.
//!     pagecheck::document::validate(SAMPLE_PAGE)?;
//!
//!     // Fetch the reference endpoint, retrying transient failures.
//!     let response = call_api(DEFAULT_API_URL).await?;
//!     println!("{:?}", response.body);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! pagecheck is organized as a workspace of focused crates:
//!
//! - [`pagecheck_document`] - The fixture page and its structural checks
//! - [`pagecheck_fetch`] - Response classification, retry budgets, and the
//!   HTTP call chain
//!
//! ## Failure Handling
//!
//! Responses are classified in a fixed rule order; transient failures
//! (413, 429, 5xx, no response) consume per-class retry budgets before
//! turning terminal. Terminal rejections carry stable, human-readable
//! reason strings; see [`RejectReason`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

// ============================================================================
// Crate Re-exports
// ============================================================================

/// The fixture page and its structural checks.
pub use pagecheck_document as document;

/// Response classification and the retrying HTTP call chain.
pub use pagecheck_fetch as fetch;

// ============================================================================
// Core Type Re-exports (Flat)
// ============================================================================

// Document
pub use pagecheck_document::{DocumentError, DocumentResult, SAMPLE_PAGE};

// Fetch
pub use pagecheck_fetch::{
    call_api, classify, ApiClient, ClassPolicy, CounterSet, FailureClass, FetchError, FetchResult,
    Outcome, RejectReason, ResponseDescriptor, RetryPolicies, SharedCounters, DEFAULT_API_URL,
};

/// Prelude for common imports.
pub mod prelude {
    pub use pagecheck_document::{DocumentError, SAMPLE_PAGE};
    pub use pagecheck_fetch::prelude::*;
    pub use pagecheck_fetch::DEFAULT_API_URL;
}
