//! The four read operations exposed by the gateway.

use log::debug;
use std::sync::Arc;

use crate::config::UpstreamConfig;
use crate::http::{FetchError, HttpClient, HttpGet};

/// Facade over the country metadata and population/flag services.
///
/// Each operation is one outbound GET: build the URL from the configured
/// base and a fixed path, relay the body on success, propagate the
/// classified failure otherwise. No caching, no aggregation across the two
/// upstreams, no post-processing.
pub struct CountryService {
    http: HttpClient,
    config: UpstreamConfig,
}

impl CountryService {
    /// Creates the service from a transport and the resolved endpoint config.
    pub fn new(transport: Arc<dyn HttpGet>, config: UpstreamConfig) -> Self {
        Self {
            http: HttpClient::new(transport),
            config,
        }
    }

    /// Lists the countries known to the metadata service.
    #[tracing::instrument(skip(self))]
    pub async fn available_countries(&self) -> Result<String, FetchError> {
        let url = format!("{}/AvailableCountries", self.config.date_nager);
        debug!("Fetching available countries from {}...", url);
        self.http
            .get("Fetching available countries failed", &url)
            .await
    }

    /// Fetches the detail record for one country.
    ///
    /// `country_code` is forwarded into the path as-is; a malformed code
    /// simply produces whatever error the upstream returns.
    #[tracing::instrument(skip(self))]
    pub async fn country_info(&self, country_code: &str) -> Result<String, FetchError> {
        let url = format!("{}/CountryInfo/{}", self.config.date_nager, country_code);
        debug!("Fetching country info from {}...", url);
        self.http
            .get(
                &format!("Fetching country info for {} failed", country_code),
                &url,
            )
            .await
    }

    /// Fetches the population table for all countries.
    #[tracing::instrument(skip(self))]
    pub async fn population(&self) -> Result<String, FetchError> {
        let url = format!("{}/countries/population", self.config.countriesnow);
        debug!("Fetching population data from {}...", url);
        self.http
            .get("Fetching countries population failed", &url)
            .await
    }

    /// Fetches the flag image table for all countries.
    #[tracing::instrument(skip(self))]
    pub async fn flags(&self) -> Result<String, FetchError> {
        let url = format!("{}/countries/flag/images", self.config.countriesnow);
        debug!("Fetching flag data from {}...", url);
        self.http
            .get("Fetching countries flags failed", &url)
            .await
    }
}
