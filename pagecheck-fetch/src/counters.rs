//! Per-failure-class retry counters.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Category of retryable failure.
///
/// Each class owns an independent retry budget; exhausting one class never
/// consumes budget from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// The request body was rejected as too large (413).
    PayloadTooLarge,
    /// The server is throttling us (429).
    RateLimited,
    /// The server failed to respond usefully (5xx).
    ServerError,
    /// No response reached us at all.
    NetworkError,
}

impl FailureClass {
    /// All failure classes, in classification order.
    pub const ALL: [FailureClass; 4] = [
        FailureClass::PayloadTooLarge,
        FailureClass::RateLimited,
        FailureClass::ServerError,
        FailureClass::NetworkError,
    ];
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureClass::PayloadTooLarge => "payload_too_large",
            FailureClass::RateLimited => "rate_limited",
            FailureClass::ServerError => "server_error",
            FailureClass::NetworkError => "network_error",
        };
        f.write_str(name)
    }
}

/// One retry counter per failure class.
///
/// Counters start at zero and only ever increase. A counter advances only
/// while its class still has budget; once the budget is spent it stops
/// changing. Counters are never reset — callers choose the lifetime by
/// choosing where the set lives (fresh per call chain, or threaded across
/// chains for a global budget).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterSet {
    payload_too_large: u32,
    rate_limited: u32,
    server_error: u32,
    network_error: u32,
}

impl CounterSet {
    /// Create a fresh set with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count of scheduled retries for a class.
    pub fn get(&self, class: FailureClass) -> u32 {
        match class {
            FailureClass::PayloadTooLarge => self.payload_too_large,
            FailureClass::RateLimited => self.rate_limited,
            FailureClass::ServerError => self.server_error,
            FailureClass::NetworkError => self.network_error,
        }
    }

    /// Total scheduled retries across every class.
    pub fn total(&self) -> u32 {
        FailureClass::ALL.iter().map(|class| self.get(*class)).sum()
    }

    pub(crate) fn bump(&mut self, class: FailureClass) {
        let slot = match class {
            FailureClass::PayloadTooLarge => &mut self.payload_too_large,
            FailureClass::RateLimited => &mut self.rate_limited,
            FailureClass::ServerError => &mut self.server_error,
            FailureClass::NetworkError => &mut self.network_error,
        };
        *slot += 1;
    }
}

/// Handle sharing one [`CounterSet`] across call chains.
///
/// With a shared set the retry budget becomes global: concurrent chains
/// classifying into the same class contend on the same counter.
#[derive(Debug, Clone, Default)]
pub struct SharedCounters(Arc<Mutex<CounterSet>>);

impl SharedCounters {
    /// Create a shared set with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count of scheduled retries for a class.
    pub fn get(&self, class: FailureClass) -> u32 {
        self.0.lock().get(class)
    }

    /// Run `f` with exclusive access to the underlying set.
    ///
    /// The lock is held only for the duration of `f`; never hold it across
    /// an await point.
    pub fn with<R>(&self, f: impl FnOnce(&mut CounterSet) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// Copy of the current counter values.
    pub fn snapshot(&self) -> CounterSet {
        self.0.lock().clone()
    }
}
