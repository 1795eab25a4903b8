//! Upstream endpoint configuration, resolved once at startup.

/// Placeholder base URL used when an upstream is not configured.
///
/// Deliberately not a usable URL: requests against it fail at the transport
/// layer and surface as classified failures instead of being rejected at
/// startup.
pub const UNCONFIGURED_API: &str = "undefined_api";

/// Base URLs of the two upstream services.
///
/// Immutable for the process lifetime; constructed once in `main` and handed
/// to the country service.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the country metadata service (date/nager style).
    pub date_nager: String,
    /// Base URL of the population/flag service (countriesnow style).
    pub countriesnow: String,
}

impl UpstreamConfig {
    /// Build the config from optional values, falling back to the
    /// [`UNCONFIGURED_API`] placeholder for anything unset.
    pub fn new(date_nager: Option<String>, countriesnow: Option<String>) -> Self {
        Self {
            date_nager: date_nager.unwrap_or_else(|| UNCONFIGURED_API.to_string()),
            countriesnow: countriesnow.unwrap_or_else(|| UNCONFIGURED_API.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_both_urls() {
        let config = UpstreamConfig::new(
            Some("https://date.nager.at/api/v3".to_string()),
            Some("https://countriesnow.space/api/v0.1".to_string()),
        );
        assert_eq!(config.date_nager, "https://date.nager.at/api/v3");
        assert_eq!(config.countriesnow, "https://countriesnow.space/api/v0.1");
    }

    #[test]
    fn test_config_falls_back_to_placeholder() {
        let config = UpstreamConfig::new(None, None);
        assert_eq!(config.date_nager, UNCONFIGURED_API);
        assert_eq!(config.countriesnow, UNCONFIGURED_API);
    }

    #[test]
    fn test_config_partial_fallback() {
        let config = UpstreamConfig::new(Some("https://date.nager.at/api/v3".to_string()), None);
        assert_eq!(config.date_nager, "https://date.nager.at/api/v3");
        assert_eq!(config.countriesnow, UNCONFIGURED_API);
    }
}
