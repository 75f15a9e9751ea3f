//! HTTP transport.

use crate::descriptor::ResponseDescriptor;
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Other(err.into())
        }
    }
}

/// Performs the actual network call.
///
/// Callers never inspect transport internals, only the returned descriptor.
/// An `Err` means no response reached us; the executor treats it as a
/// descriptor with no status.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one GET against `url` and describe what came back.
    async fn fetch(&self, url: &str) -> Result<ResponseDescriptor, TransportError>;
}

/// [`Transport`] backed by a reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with a default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<ResponseDescriptor, TransportError> {
        debug!(url = %url, "executing HTTP request");

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        let body = if text.is_empty() {
            None
        } else {
            // JSON when it parses, raw text otherwise.
            match serde_json::from_str::<Value>(&text) {
                Ok(value) => Some(value),
                Err(_) => Some(Value::String(text)),
            }
        };

        Ok(ResponseDescriptor {
            status: Some(status),
            body,
        })
    }
}
