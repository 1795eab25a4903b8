//! Maps classified failures onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::http::FetchError;

fn status(err: &FetchError) -> StatusCode {
    match err {
        FetchError::NotFound(_) => StatusCode::NOT_FOUND,
        FetchError::Upstream(_) | FetchError::NoResponse(_) => StatusCode::BAD_GATEWAY,
        FetchError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn category(err: &FetchError) -> &'static str {
    match err {
        FetchError::NotFound(_) => "not_found",
        FetchError::Upstream(_) => "upstream_error",
        FetchError::NoResponse(_) => "upstream_unreachable",
        FetchError::Internal { .. } => "internal",
    }
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": category(&self),
            "message": self.to_string(),
        });
        (status(&self), Json(body)).into_response()
    }
}
