//! Retry policy configuration.

use crate::counters::FailureClass;
use std::time::Duration;

/// Retry budget and delay for one failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassPolicy {
    /// Maximum number of retries scheduled before the class turns terminal.
    pub max_attempts: u32,
    /// Delay before each scheduled retry.
    pub delay: Duration,
}

impl ClassPolicy {
    /// Create a policy from a budget and a delay.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

/// Per-class retry policy table.
///
/// The default table matches the reference behavior: three 2-second retries
/// for payload, rate-limit, and server failures, eleven 3-second retries for
/// network failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicies {
    /// Policy applied to 413 responses.
    pub payload_too_large: ClassPolicy,
    /// Policy applied to 429 responses.
    pub rate_limited: ClassPolicy,
    /// Policy applied to 5xx responses.
    pub server_error: ClassPolicy,
    /// Policy applied when no response arrived.
    pub network_error: ClassPolicy,
}

impl Default for RetryPolicies {
    fn default() -> Self {
        Self {
            payload_too_large: ClassPolicy::new(3, Duration::from_millis(2000)),
            rate_limited: ClassPolicy::new(3, Duration::from_millis(2000)),
            server_error: ClassPolicy::new(3, Duration::from_millis(2000)),
            network_error: ClassPolicy::new(11, Duration::from_millis(3000)),
        }
    }
}

impl RetryPolicies {
    /// Create the default policy table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The same policy for every class. Mostly useful in tests.
    pub fn uniform(max_attempts: u32, delay: Duration) -> Self {
        let policy = ClassPolicy::new(max_attempts, delay);
        Self {
            payload_too_large: policy,
            rate_limited: policy,
            server_error: policy,
            network_error: policy,
        }
    }

    /// A table that never schedules a retry.
    pub fn no_retry() -> Self {
        Self::uniform(0, Duration::ZERO)
    }

    /// Set the 413 policy.
    pub fn payload_too_large(mut self, policy: ClassPolicy) -> Self {
        self.payload_too_large = policy;
        self
    }

    /// Set the 429 policy.
    pub fn rate_limited(mut self, policy: ClassPolicy) -> Self {
        self.rate_limited = policy;
        self
    }

    /// Set the 5xx policy.
    pub fn server_error(mut self, policy: ClassPolicy) -> Self {
        self.server_error = policy;
        self
    }

    /// Set the no-response policy.
    pub fn network_error(mut self, policy: ClassPolicy) -> Self {
        self.network_error = policy;
        self
    }

    /// Look up the policy for a failure class.
    pub fn policy(&self, class: FailureClass) -> ClassPolicy {
        match class {
            FailureClass::PayloadTooLarge => self.payload_too_large,
            FailureClass::RateLimited => self.rate_limited,
            FailureClass::ServerError => self.server_error,
            FailureClass::NetworkError => self.network_error,
        }
    }
}
