//! Inbound REST surface.
//!
//! ```text
//! GET  /                               liveness line
//! GET  /countries/available            available-countries payload
//! GET  /countries/info/{country_code}  country-info payload
//! GET  /countries/population           population payload
//! GET  /countries/flags                flags payload
//! ```
//!
//! Success responses relay the upstream body verbatim; failures map to
//! 404 / 502 / 502 / 500 per category (see `response`).

mod handlers;
mod response;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use log::info;
use tokio::net::TcpListener;

use crate::country::CountryService;

/// Router state injected into every handler via [`axum::extract::State`].
///
/// Cheap to clone; the service is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CountryService>,
}

/// Builds the router with all routes mounted.
pub fn build_router(service: Arc<CountryService>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/countries/available", get(handlers::available_countries))
        .route("/countries/info/{country_code}", get(handlers::country_info))
        .route("/countries/population", get(handlers::population))
        .route("/countries/flags", get(handlers::flags))
        .with_state(AppState { service })
}

/// Serves the router until ctrl-c.
pub async fn serve(listener: TcpListener, service: Arc<CountryService>) -> Result<()> {
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("Listening on {}", addr);

    axum::serve(listener, build_router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
