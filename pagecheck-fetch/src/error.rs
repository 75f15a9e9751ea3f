//! Fetch error types.

use thiserror::Error;

/// Terminal rejection reasons.
///
/// The display strings are part of the contract; callers match on the
/// variant, but the rendered text must not drift.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The response carried no content, whatever the status.
    #[error("No Content")]
    NoContent,

    /// 400, or any status in the 430..500 band.
    #[error("Client Error: Bad Request")]
    BadRequest,

    /// 401.
    #[error("Client Error: Unauthorized")]
    Unauthorized,

    /// 404.
    #[error("Client Error: Not Found")]
    NotFound,

    /// 413 with the payload retry budget spent.
    #[error("Client Error: Payload Too Large")]
    PayloadTooLarge,

    /// 429 with the rate-limit retry budget spent.
    #[error("Client Error: Too Many Requests")]
    TooManyRequests,

    /// 5xx with the server retry budget spent.
    #[error("Server Error: Please Try Later")]
    ServerUnavailable,

    /// No response, with the network retry budget spent.
    #[error("Network Error: Please Check Connection")]
    NetworkUnreachable,
}

/// Error surfaced when a call chain ends without an accepted response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The classifier rejected the response.
    #[error(transparent)]
    Rejected(#[from] RejectReason),

    /// The response matched no classification rule.
    #[error("indeterminate response: status {status:?} matched no rule")]
    Indeterminate {
        /// Status of the unmatched response.
        status: Option<u16>,
    },
}

impl FetchError {
    /// The rejection reason, if this is a rejection.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            FetchError::Rejected(reason) => Some(*reason),
            FetchError::Indeterminate { .. } => None,
        }
    }
}

/// Result type for call chains.
pub type FetchResult<T> = Result<T, FetchError>;

/// Transport-level failures, below the classifier.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request timed out.
    #[error("Timeout")]
    Timeout,

    /// The connection could not be established.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Other error.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl TransportError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }
}
