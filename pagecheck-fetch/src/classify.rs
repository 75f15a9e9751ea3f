//! Response classification.
//!
//! [`classify`] is the decision procedure that turns one response descriptor
//! into accept / retry / reject. It is pure apart from the counter set it is
//! handed: a retry decision consumes budget from the matching failure class.

use crate::config::RetryPolicies;
use crate::counters::{CounterSet, FailureClass};
use crate::descriptor::ResponseDescriptor;
use crate::error::RejectReason;
use std::time::Duration;

/// Decision produced by one classification pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The response is good; the chain is done.
    Accept(ResponseDescriptor),
    /// Transient failure; run the attempt again after the delay.
    RetryAfter {
        /// How long to wait before the next attempt.
        delay: Duration,
        /// Failure class whose budget was consumed.
        class: FailureClass,
    },
    /// Terminal failure.
    Reject(RejectReason),
    /// The response matched no rule; the chain cannot proceed.
    Indeterminate,
}

impl Outcome {
    /// Whether this outcome ends the call chain.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::RetryAfter { .. })
    }
}

/// Classify one response against the policy table.
///
/// The first matching rule wins, and the rule order is part of the contract.
/// In particular, an empty body rejects before the status is looked at, so a
/// 2xx with no content still yields [`RejectReason::NoContent`].
///
/// A retry decision increments the class counter as part of issuing the
/// outcome, so counters track attempts scheduled, not attempts completed.
pub fn classify(
    descriptor: &ResponseDescriptor,
    counters: &mut CounterSet,
    policies: &RetryPolicies,
) -> Outcome {
    if !descriptor.has_content() {
        return Outcome::Reject(RejectReason::NoContent);
    }

    match descriptor.status {
        Some(status) if (200..300).contains(&status) => Outcome::Accept(descriptor.clone()),
        Some(400) => Outcome::Reject(RejectReason::BadRequest),
        Some(401) => Outcome::Reject(RejectReason::Unauthorized),
        Some(404) => Outcome::Reject(RejectReason::NotFound),
        Some(413) => retry_or_reject(FailureClass::PayloadTooLarge, counters, policies),
        Some(429) => retry_or_reject(FailureClass::RateLimited, counters, policies),
        Some(status) if (430..500).contains(&status) => Outcome::Reject(RejectReason::BadRequest),
        Some(status) if status >= 500 => {
            retry_or_reject(FailureClass::ServerError, counters, policies)
        }
        Some(_) => Outcome::Indeterminate,
        None => retry_or_reject(FailureClass::NetworkError, counters, policies),
    }
}

fn retry_or_reject(
    class: FailureClass,
    counters: &mut CounterSet,
    policies: &RetryPolicies,
) -> Outcome {
    let policy = policies.policy(class);
    if counters.get(class) < policy.max_attempts {
        counters.bump(class);
        Outcome::RetryAfter {
            delay: policy.delay,
            class,
        }
    } else {
        Outcome::Reject(exhausted(class))
    }
}

fn exhausted(class: FailureClass) -> RejectReason {
    match class {
        FailureClass::PayloadTooLarge => RejectReason::PayloadTooLarge,
        FailureClass::RateLimited => RejectReason::TooManyRequests,
        FailureClass::ServerError => RejectReason::ServerUnavailable,
        FailureClass::NetworkError => RejectReason::NetworkUnreachable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    fn with_body(status: u16) -> ResponseDescriptor {
        ResponseDescriptor::with_body(status, json!("x"))
    }

    fn classify_default(descriptor: &ResponseDescriptor, counters: &mut CounterSet) -> Outcome {
        classify(descriptor, counters, &RetryPolicies::default())
    }

    #[rstest]
    #[case::no_body(ResponseDescriptor::empty(200))]
    #[case::null_body(ResponseDescriptor::with_body(204, Value::Null))]
    #[case::empty_string(ResponseDescriptor::with_body(500, json!("")))]
    #[case::zero(ResponseDescriptor::with_body(429, json!(0)))]
    #[case::no_status(ResponseDescriptor::no_response(None))]
    fn empty_body_rejects_before_anything_else(#[case] descriptor: ResponseDescriptor) {
        let mut counters = CounterSet::new();
        let outcome = classify_default(&descriptor, &mut counters);
        assert_eq!(outcome, Outcome::Reject(RejectReason::NoContent));
        // No retry budget consumed, even for retryable statuses.
        assert_eq!(counters.total(), 0);
    }

    #[rstest]
    #[case(200)]
    #[case(201)]
    #[case(204)]
    #[case(299)]
    fn success_band_accepts(#[case] status: u16) {
        let mut counters = CounterSet::new();
        let descriptor = with_body(status);
        assert_eq!(
            classify_default(&descriptor, &mut counters),
            Outcome::Accept(descriptor.clone())
        );
    }

    #[rstest]
    #[case(400, RejectReason::BadRequest)]
    #[case(401, RejectReason::Unauthorized)]
    #[case(404, RejectReason::NotFound)]
    #[case(430, RejectReason::BadRequest)]
    #[case(451, RejectReason::BadRequest)]
    #[case(499, RejectReason::BadRequest)]
    fn non_retryable_client_errors_reject(#[case] status: u16, #[case] reason: RejectReason) {
        let mut counters = CounterSet::new();
        assert_eq!(
            classify_default(&with_body(status), &mut counters),
            Outcome::Reject(reason)
        );
        assert_eq!(counters.total(), 0);
    }

    #[test]
    fn bad_request_reason_literal() {
        let mut counters = CounterSet::new();
        let Outcome::Reject(reason) = classify_default(&with_body(400), &mut counters) else {
            panic!("expected rejection");
        };
        assert_eq!(reason.to_string(), "Client Error: Bad Request");
    }

    #[rstest]
    #[case::payload(413, FailureClass::PayloadTooLarge, 3, 2000, RejectReason::PayloadTooLarge)]
    #[case::rate(429, FailureClass::RateLimited, 3, 2000, RejectReason::TooManyRequests)]
    #[case::server(500, FailureClass::ServerError, 3, 2000, RejectReason::ServerUnavailable)]
    #[case::server_high(503, FailureClass::ServerError, 3, 2000, RejectReason::ServerUnavailable)]
    fn retry_budget_then_terminal(
        #[case] status: u16,
        #[case] class: FailureClass,
        #[case] budget: u32,
        #[case] delay_ms: u64,
        #[case] terminal: RejectReason,
    ) {
        let mut counters = CounterSet::new();
        let descriptor = with_body(status);

        for attempt in 1..=budget {
            let outcome = classify_default(&descriptor, &mut counters);
            assert_eq!(
                outcome,
                Outcome::RetryAfter {
                    delay: Duration::from_millis(delay_ms),
                    class,
                }
            );
            assert_eq!(counters.get(class), attempt);
        }

        // Budget spent: terminal from here on, counter frozen.
        for _ in 0..2 {
            assert_eq!(
                classify_default(&descriptor, &mut counters),
                Outcome::Reject(terminal)
            );
            assert_eq!(counters.get(class), budget);
        }
    }

    #[test]
    fn network_failure_budget_is_eleven() {
        let mut counters = CounterSet::new();
        let descriptor = ResponseDescriptor::no_response(Some(json!("x")));

        for attempt in 1..=11u32 {
            assert_eq!(
                classify_default(&descriptor, &mut counters),
                Outcome::RetryAfter {
                    delay: Duration::from_millis(3000),
                    class: FailureClass::NetworkError,
                }
            );
            assert_eq!(counters.get(FailureClass::NetworkError), attempt);
        }

        assert_eq!(
            classify_default(&descriptor, &mut counters),
            Outcome::Reject(RejectReason::NetworkUnreachable)
        );
        assert_eq!(counters.get(FailureClass::NetworkError), 11);
    }

    #[test]
    fn first_network_failure_schedules_three_second_retry() {
        let mut counters = CounterSet::new();
        let descriptor = ResponseDescriptor::no_response(Some(json!("x")));
        assert_eq!(
            classify_default(&descriptor, &mut counters),
            Outcome::RetryAfter {
                delay: Duration::from_millis(3000),
                class: FailureClass::NetworkError,
            }
        );
    }

    #[test]
    fn server_errors_consume_a_single_shared_budget() {
        // Three 500s spend the budget; a later 502 is already terminal.
        let mut counters = CounterSet::new();
        for _ in 0..3 {
            let outcome = classify_default(&with_body(500), &mut counters);
            assert!(!outcome.is_terminal());
        }
        assert_eq!(counters.get(FailureClass::ServerError), 3);
        assert_eq!(
            classify_default(&with_body(502), &mut counters),
            Outcome::Reject(RejectReason::ServerUnavailable)
        );
    }

    #[test]
    fn budgets_are_independent_across_classes() {
        let mut counters = CounterSet::new();
        for _ in 0..3 {
            classify_default(&with_body(413), &mut counters);
        }
        // Payload budget is spent; rate-limit budget is untouched.
        assert_eq!(
            classify_default(&with_body(413), &mut counters),
            Outcome::Reject(RejectReason::PayloadTooLarge)
        );
        assert!(!classify_default(&with_body(429), &mut counters).is_terminal());
    }

    #[rstest]
    #[case(100)]
    #[case(302)]
    #[case(304)]
    #[case(402)]
    #[case(403)]
    #[case(410)]
    #[case(418)]
    #[case(428)]
    fn unmatched_statuses_are_indeterminate(#[case] status: u16) {
        let mut counters = CounterSet::new();
        assert_eq!(
            classify_default(&with_body(status), &mut counters),
            Outcome::Indeterminate
        );
        assert_eq!(counters.total(), 0);
    }

    #[test]
    fn custom_policies_are_honored() {
        let policies = RetryPolicies::uniform(1, Duration::from_millis(5));
        let mut counters = CounterSet::new();

        assert_eq!(
            classify(&with_body(500), &mut counters, &policies),
            Outcome::RetryAfter {
                delay: Duration::from_millis(5),
                class: FailureClass::ServerError,
            }
        );
        assert_eq!(
            classify(&with_body(500), &mut counters, &policies),
            Outcome::Reject(RejectReason::ServerUnavailable)
        );
    }

    #[test]
    fn no_retry_policies_reject_immediately() {
        let mut counters = CounterSet::new();
        assert_eq!(
            classify(&with_body(500), &mut counters, &RetryPolicies::no_retry()),
            Outcome::Reject(RejectReason::ServerUnavailable)
        );
        assert_eq!(counters.total(), 0);
    }
}
