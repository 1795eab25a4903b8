//! Classification of upstream failures into the gateway's error categories.

use reqwest::StatusCode;

use super::transport::TransportError;

/// A failed upstream operation, classified for the inbound layer.
///
/// Every variant carries the operation-specific message prefix (e.g.
/// "Fetching country info for US failed"); `Display` appends the
/// category-specific detail.
#[derive(Debug)]
pub enum FetchError {
    /// Upstream answered 404.
    NotFound(String),
    /// Upstream answered with any other non-success status.
    Upstream(String),
    /// The request was sent but no response arrived.
    NoResponse(String),
    /// The request could not be constructed or sent.
    Internal { context: String, detail: String },
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NotFound(context) => write!(f, "{}: Not Found", context),
            FetchError::Upstream(context) => write!(f, "{}: External API error", context),
            FetchError::NoResponse(context) => {
                write!(f, "{}: No response from external API", context)
            }
            FetchError::Internal { context, detail } => write!(f, "{}: {}", context, detail),
        }
    }
}

impl std::error::Error for FetchError {}

impl FetchError {
    /// Classify a transport-level failure (no usable response at all).
    pub fn from_transport(context: &str, error: TransportError) -> Self {
        match error {
            TransportError::NoResponse(_) => FetchError::NoResponse(context.to_string()),
            TransportError::Build(detail) => FetchError::Internal {
                context: context.to_string(),
                detail,
            },
        }
    }
}

/// Classify a response status outside the success range.
///
/// 404 is checked first; every other status maps to the generic upstream
/// category. The exact status code is not carried into the message.
pub fn classify_status(context: &str, status: StatusCode) -> FetchError {
    if status == StatusCode::NOT_FOUND {
        return FetchError::NotFound(context.to_string());
    }
    FetchError::Upstream(context.to_string())
}
