//! Axum handlers for the `/countries` routes.
//!
//! Each handler is a straight delegation: call the service, relay the body
//! verbatim with a JSON content type, or surface the classified failure.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use log::warn;

use crate::http::FetchError;

use super::AppState;

/// GET /
pub(super) async fn root() -> &'static str {
    "country-gateway is running\n"
}

/// GET /countries/available
pub(super) async fn available_countries(State(state): State<AppState>) -> Response {
    relay(state.service.available_countries().await)
}

/// GET /countries/info/{country_code}
pub(super) async fn country_info(
    State(state): State<AppState>,
    Path(country_code): Path<String>,
) -> Response {
    relay(state.service.country_info(&country_code).await)
}

/// GET /countries/population
pub(super) async fn population(State(state): State<AppState>) -> Response {
    relay(state.service.population().await)
}

/// GET /countries/flags
pub(super) async fn flags(State(state): State<AppState>) -> Response {
    relay(state.service.flags().await)
}

/// Relay an upstream body verbatim, or surface the classified failure.
fn relay(result: Result<String, FetchError>) -> Response {
    match result {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            warn!("{}", e);
            e.into_response()
        }
    }
}
