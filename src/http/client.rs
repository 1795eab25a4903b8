//! Single-shot GET with failure classification.

use log::debug;
use std::sync::Arc;

use super::error::{FetchError, classify_status};
use super::transport::HttpGet;

/// Thin fetch layer over the transport capability.
///
/// One request per call: no retry, no timeout beyond the transport's
/// defaults, no interpretation of the body.
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn HttpGet>,
}

impl HttpClient {
    /// Creates a new fetch layer over the given transport.
    pub fn new(transport: Arc<dyn HttpGet>) -> Self {
        Self { transport }
    }

    /// Performs a GET and returns the body verbatim on success.
    ///
    /// `context` is the operation-specific message prefix carried into any
    /// classified failure.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, context: &str, url: &str) -> Result<String, FetchError> {
        debug!("GET {}...", url);

        let response = self
            .transport
            .get(url)
            .await
            .map_err(|e| FetchError::from_transport(context, e))?;

        if response.status.is_success() {
            return Ok(response.body);
        }

        Err(classify_status(context, response.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::transport::{MockHttpGet, RawResponse, ReqwestTransport, TransportError};
    use mockall::predicate::eq;
    use reqwest::{Client, StatusCode};

    #[tokio::test]
    async fn test_get_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/countries/population")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":false,"msg":"ok","data":[]}"#)
            .create_async()
            .await;

        let client = HttpClient::new(Arc::new(ReqwestTransport::new(Client::new())));
        let body = client
            .get(
                "Fetching countries population failed",
                &format!("{}/countries/population", url),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body, r#"{"error":false,"msg":"ok","data":[]}"#);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/CountryInfo/ZZ")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new(Arc::new(ReqwestTransport::new(Client::new())));
        let err = client
            .get(
                "Fetching country info for ZZ failed",
                &format!("{}/CountryInfo/ZZ", url),
            )
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(
            err.to_string(),
            "Fetching country info for ZZ failed: Not Found"
        );
    }

    #[tokio::test]
    async fn test_get_server_error() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/AvailableCountries")
            .with_status(500)
            .create_async()
            .await;

        let client = HttpClient::new(Arc::new(ReqwestTransport::new(Client::new())));
        let err = client
            .get(
                "Fetching available countries failed",
                &format!("{}/AvailableCountries", url),
            )
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, FetchError::Upstream(_)));
        assert_eq!(
            err.to_string(),
            "Fetching available countries failed: External API error"
        );
    }

    #[tokio::test]
    async fn test_get_no_response_via_mock_transport() {
        let mut transport = MockHttpGet::new();
        transport
            .expect_get()
            .with(eq("http://upstream/AvailableCountries"))
            .returning(|_| Err(TransportError::NoResponse("connection refused".to_string())));

        let client = HttpClient::new(Arc::new(transport));
        let err = client
            .get(
                "Fetching available countries failed",
                "http://upstream/AvailableCountries",
            )
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Fetching available countries failed: No response from external API"
        );
    }

    #[tokio::test]
    async fn test_get_build_error_via_mock_transport() {
        let mut transport = MockHttpGet::new();
        transport.expect_get().returning(|_| {
            Err(TransportError::Build(
                "relative URL without a base".to_string(),
            ))
        });

        let client = HttpClient::new(Arc::new(transport));
        let err = client
            .get(
                "Fetching countries flags failed",
                "undefined_api/countries/flag/images",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Internal { .. }));
        assert_eq!(
            err.to_string(),
            "Fetching countries flags failed: relative URL without a base"
        );
    }

    #[tokio::test]
    async fn test_get_redirect_status_is_upstream_error() {
        let mut transport = MockHttpGet::new();
        transport.expect_get().returning(|_| {
            Ok(RawResponse {
                status: StatusCode::NOT_MODIFIED,
                body: String::new(),
            })
        });

        let client = HttpClient::new(Arc::new(transport));
        let err = client
            .get(
                "Fetching available countries failed",
                "http://upstream/AvailableCountries",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Upstream(_)));
    }
}
