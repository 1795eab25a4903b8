use anyhow::{Context, Result};
use clap::Parser;
use country_gateway::config::UpstreamConfig;
use country_gateway::country::CountryService;
use country_gateway::http::ReqwestTransport;
use country_gateway::server;
use std::sync::Arc;
use tokio::net::TcpListener;

/// country-gateway - unified HTTP gateway over public country data APIs
///
/// Proxies a date/nager-style country metadata service and a
/// countriesnow-style population/flag service behind one set of
/// /countries endpoints.
///
/// Unset base URLs fall back to a non-routable placeholder, so the gateway
/// starts regardless and the affected endpoints fail per request.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Address to listen on (also via COUNTRY_GATEWAY_BIND)
    #[arg(
        long = "bind",
        env = "COUNTRY_GATEWAY_BIND",
        value_name = "ADDR",
        default_value = "127.0.0.1:3000"
    )]
    bind: String,

    /// Base URL of the country metadata service (also via API_DATE_NAGER)
    #[arg(long = "date-nager-api", env = "API_DATE_NAGER", value_name = "URL")]
    date_nager_api: Option<String>,

    /// Base URL of the population/flag service (also via API_COUNTRIESNOW)
    #[arg(long = "countriesnow-api", env = "API_COUNTRIESNOW", value_name = "URL")]
    countriesnow_api: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = UpstreamConfig::new(cli.date_nager_api, cli.countriesnow_api);
    let transport = Arc::new(ReqwestTransport::new(reqwest::Client::new()));
    let service = Arc::new(CountryService::new(transport, config));

    let listener = TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("Failed to bind {}", cli.bind))?;

    server::serve(listener, service).await
}
