//! Outbound HTTP transport capability.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// An upstream response: status plus the body exactly as received.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Transport-level failure, before any status-based classification.
#[derive(Debug)]
pub enum TransportError {
    /// The request was sent but no response came back (connect failure,
    /// timeout, or a stream that broke before the body completed).
    NoResponse(String),
    /// The request could not be constructed or sent at all (e.g. a
    /// malformed URL).
    Build(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::NoResponse(detail) => write!(f, "No response: {}", detail),
            TransportError::Build(detail) => write!(f, "Request failed: {}", detail),
        }
    }
}

impl std::error::Error for TransportError {}

/// Capability to issue a single HTTP GET against a fully-formed URL.
///
/// The production implementation wraps reqwest; tests mock this trait to
/// drive every failure branch without touching the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpGet: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpGet for ReqwestTransport {
    #[tracing::instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_builder() {
                TransportError::Build(e.to_string())
            } else {
                TransportError::NoResponse(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::NoResponse(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
