//! Call-chain executor: transport, classification, scheduled retries.
//!
//! One call chain runs Transport → Classifier in a loop. A retry outcome
//! waits out its delay without blocking the runtime and then re-issues the
//! whole attempt; the chain ends at the first terminal outcome.

use crate::classify::{classify, Outcome};
use crate::config::RetryPolicies;
use crate::counters::CounterSet;
use crate::descriptor::ResponseDescriptor;
use crate::error::{FetchError, FetchResult};
use crate::transport::{HttpTransport, Transport};
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// URL of the reference fixture endpoint.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

/// Progress of one call chain.
#[derive(Debug, Clone, Default)]
pub struct ChainState {
    /// Attempts issued so far (1-indexed once the chain has run).
    pub attempt: u32,
    /// Last non-accepting classification, rendered.
    pub last_error: Option<String>,
    /// Total time spent waiting between attempts.
    pub total_wait_time: Duration,
    /// History of attempts.
    pub history: Vec<AttemptInfo>,
}

/// Information about a single attempt.
#[derive(Debug, Clone)]
pub struct AttemptInfo {
    /// Attempt number.
    pub attempt: u32,
    /// Status the attempt came back with, if any.
    pub status: Option<u16>,
    /// Whether the attempt was accepted.
    pub success: bool,
    /// Classification rendered as text, for non-accepting attempts.
    pub error: Option<String>,
    /// Time waited after this attempt before the next one.
    pub wait_time: Duration,
}

/// Run one full call chain against the fixture defaults.
///
/// Uses a fresh [`CounterSet`], so every chain gets the whole retry budget.
/// Thread your own counters through [`call_with`] to share budget across
/// chains instead.
pub async fn call_api(url: &str) -> FetchResult<ResponseDescriptor> {
    let mut counters = CounterSet::new();
    call_with(
        &HttpTransport::new(),
        url,
        &RetryPolicies::default(),
        &mut counters,
    )
    .await
}

/// Run a call chain with an injected transport, policy table, and counters.
pub async fn call_with<T>(
    transport: &T,
    url: &str,
    policies: &RetryPolicies,
    counters: &mut CounterSet,
) -> FetchResult<ResponseDescriptor>
where
    T: Transport + ?Sized,
{
    let (result, _state) = call_with_state(transport, url, policies, counters).await;
    result
}

/// Like [`call_with`], returning the chain state alongside the result.
pub async fn call_with_state<T>(
    transport: &T,
    url: &str,
    policies: &RetryPolicies,
    counters: &mut CounterSet,
) -> (FetchResult<ResponseDescriptor>, ChainState)
where
    T: Transport + ?Sized,
{
    call_with_classifier(transport, url, |descriptor| {
        classify(descriptor, counters, policies)
    })
    .await
}

/// Run a call chain with a custom classification step.
///
/// The closure is invoked once per attempt and must not block; counter
/// locking, when any, stays inside it and never spans an await point.
pub async fn call_with_classifier<T, C>(
    transport: &T,
    url: &str,
    mut classify_step: C,
) -> (FetchResult<ResponseDescriptor>, ChainState)
where
    T: Transport + ?Sized,
    C: FnMut(&ResponseDescriptor) -> Outcome,
{
    let mut state = ChainState::default();

    loop {
        state.attempt += 1;

        debug!(attempt = state.attempt, url = %url, "executing attempt");

        let descriptor = match transport.fetch(url).await {
            Ok(descriptor) => descriptor,
            // No response reached us. The fault text rides in the body so
            // classification lands on the network rule, not the no-content
            // rule.
            Err(err) => ResponseDescriptor::no_response(Some(Value::String(err.to_string()))),
        };
        let status = descriptor.status;

        match classify_step(&descriptor) {
            Outcome::Accept(accepted) => {
                state.history.push(AttemptInfo {
                    attempt: state.attempt,
                    status,
                    success: true,
                    error: None,
                    wait_time: Duration::ZERO,
                });
                return (Ok(accepted), state);
            }
            Outcome::Reject(reason) => {
                warn!(
                    attempt = state.attempt,
                    status = ?status,
                    reason = %reason,
                    "terminal rejection"
                );
                state.last_error = Some(reason.to_string());
                state.history.push(AttemptInfo {
                    attempt: state.attempt,
                    status,
                    success: false,
                    error: Some(reason.to_string()),
                    wait_time: Duration::ZERO,
                });
                return (Err(FetchError::Rejected(reason)), state);
            }
            Outcome::Indeterminate => {
                let err = FetchError::Indeterminate { status };
                warn!(
                    attempt = state.attempt,
                    status = ?status,
                    "response matched no classification rule"
                );
                state.last_error = Some(err.to_string());
                state.history.push(AttemptInfo {
                    attempt: state.attempt,
                    status,
                    success: false,
                    error: Some(err.to_string()),
                    wait_time: Duration::ZERO,
                });
                return (Err(err), state);
            }
            Outcome::RetryAfter { delay, class } => {
                state.total_wait_time += delay;
                state.last_error = Some(class.to_string());
                state.history.push(AttemptInfo {
                    attempt: state.attempt,
                    status,
                    success: false,
                    error: Some(class.to_string()),
                    wait_time: delay,
                });

                debug!(
                    attempt = state.attempt,
                    class = %class,
                    wait_ms = delay.as_millis() as u64,
                    "waiting before retry"
                );

                sleep(delay).await;
            }
        }
    }
}
