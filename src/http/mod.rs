//! Outbound HTTP: transport capability, fetch layer, and error classification.

mod client;
mod error;
mod transport;

pub use client::HttpClient;
pub use error::{FetchError, classify_status};
pub use transport::{HttpGet, RawResponse, ReqwestTransport, TransportError};

#[cfg(test)]
pub use transport::MockHttpGet;
