//! # pagecheck-fetch
//!
//! Status-classified HTTP fetching with per-class retry budgets.
//!
//! This crate wraps a single outbound HTTP call with a decision procedure
//! that turns a status code and body into "accept", "retry after a delay",
//! or "fail with a reason". Each retryable failure class owns an
//! independent, bounded retry budget.
//!
//! ## Core Concepts
//!
//! - **[`ResponseDescriptor`]**: what one HTTP attempt produced
//! - **[`classify`]**: the decision table over a descriptor and counters
//! - **[`RetryPolicies`]**: per-class retry budgets and delays
//! - **[`CounterSet`]**: the per-class retry counters
//! - **[`call_api`]** / **[`ApiClient`]**: run a full call chain to a
//!   terminal outcome
//!
//! ## Failure Classes
//!
//! - [`FailureClass::PayloadTooLarge`]: 413, three 2-second retries
//! - [`FailureClass::RateLimited`]: 429, three 2-second retries
//! - [`FailureClass::ServerError`]: 5xx, three 2-second retries
//! - [`FailureClass::NetworkError`]: no response, eleven 3-second retries
//!
//! ## Example
//!
//! ```ignore
//! use pagecheck_fetch::{call_api, DEFAULT_API_URL};
//!
//! let descriptor = call_api(DEFAULT_API_URL).await?;
//! assert_eq!(descriptor.status, Some(200));
//! ```
//!
//! ## Sharing a retry budget
//!
//! ```ignore
//! use pagecheck_fetch::{ApiClient, SharedCounters};
//!
//! let client = ApiClient::new().shared_counters(SharedCounters::new());
//!
//! // Every chain issued by this client now contends on the same counters.
//! let response = client.call("https://api.example.com/data").await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod classify;
pub mod client;
pub mod config;
pub mod counters;
pub mod descriptor;
pub mod error;
pub mod executor;
pub mod transport;

// Re-exports
pub use classify::{classify, Outcome};
pub use client::{ApiClient, ApiClientBuilder};
pub use config::{ClassPolicy, RetryPolicies};
pub use counters::{CounterSet, FailureClass, SharedCounters};
pub use descriptor::ResponseDescriptor;
pub use error::{FetchError, FetchResult, RejectReason, TransportError};
pub use executor::{call_api, call_with, call_with_state, AttemptInfo, ChainState, DEFAULT_API_URL};
pub use transport::{HttpTransport, Transport};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        call_api, classify, ApiClient, CounterSet, FailureClass, FetchError, FetchResult, Outcome,
        RejectReason, ResponseDescriptor, RetryPolicies,
    };
}
