//! High-level API client.

use crate::classify::classify;
use crate::config::RetryPolicies;
use crate::counters::{CounterSet, SharedCounters};
use crate::descriptor::ResponseDescriptor;
use crate::error::FetchResult;
use crate::executor::{call_with_classifier, ChainState};
use crate::transport::{HttpTransport, Transport};
use reqwest::Client;
use std::time::Duration;

/// Client binding a transport, a policy table, and a counter scope.
///
/// Every call runs a full chain (transport, classification, scheduled
/// retries) to a terminal outcome. By default each chain gets a fresh
/// counter set; attach [`SharedCounters`] to make the retry budget global
/// across the client's chains instead.
#[derive(Debug, Clone)]
pub struct ApiClient<T = HttpTransport> {
    transport: T,
    policies: RetryPolicies,
    counters: Option<SharedCounters>,
}

impl ApiClient<HttpTransport> {
    /// Create a client with a default transport and the default policy table.
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new(), RetryPolicies::default())
    }

    /// Create a builder.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }
}

impl Default for ApiClient<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client around an existing transport.
    pub fn with_transport(transport: T, policies: RetryPolicies) -> Self {
        Self {
            transport,
            policies,
            counters: None,
        }
    }

    /// Share one retry budget across every chain issued by this client.
    pub fn shared_counters(mut self, counters: SharedCounters) -> Self {
        self.counters = Some(counters);
        self
    }

    /// Get a reference to the policy table.
    pub fn policies(&self) -> &RetryPolicies {
        &self.policies
    }

    /// Run one call chain to a terminal outcome.
    pub async fn call(&self, url: &str) -> FetchResult<ResponseDescriptor> {
        self.call_with_state(url).await.0
    }

    /// Like [`call`](Self::call), returning the chain state alongside.
    pub async fn call_with_state(
        &self,
        url: &str,
    ) -> (FetchResult<ResponseDescriptor>, ChainState) {
        match &self.counters {
            Some(shared) => {
                let shared = shared.clone();
                call_with_classifier(&self.transport, url, move |descriptor| {
                    shared.with(|counters| classify(descriptor, counters, &self.policies))
                })
                .await
            }
            None => {
                let mut counters = CounterSet::new();
                call_with_classifier(&self.transport, url, |descriptor| {
                    classify(descriptor, &mut counters, &self.policies)
                })
                .await
            }
        }
    }
}

/// Builder for [`ApiClient`].
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    client: Option<Client>,
    policies: Option<RetryPolicies>,
    timeout: Option<Duration>,
    counters: Option<SharedCounters>,
}

impl ApiClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the underlying HTTP client.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the retry policy table.
    pub fn policies(mut self, policies: RetryPolicies) -> Self {
        self.policies = Some(policies);
        self
    }

    /// Set a request timeout on the built client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Share a counter set across the client's chains.
    pub fn shared_counters(mut self, counters: SharedCounters) -> Self {
        self.counters = Some(counters);
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiClient<HttpTransport> {
        let client = self.client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build().expect("Failed to build client")
        });

        let mut api = ApiClient::with_transport(
            HttpTransport::with_client(client),
            self.policies.unwrap_or_default(),
        );
        if let Some(counters) = self.counters {
            api.counters = Some(counters);
        }
        api
    }
}
