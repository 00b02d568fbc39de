use clap::Parser;

use super::parsers::parse_positive_usize;

pub(crate) const DEFAULT_DESTINATION: &str = "httpbin.org";

/// Load generator configuration, resolved once at startup and passed to each
/// component as an immutable value.
#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Synthetic load generator for proxy infrastructure - rotates requests through a proxy pool at a fixed rate and exports Prometheus metrics."
)]
pub struct GeneratorArgs {
    /// Proxy pool configuration, one 'vendor:ip1,ip2,...[:port]' entry per line
    #[arg(
        long = "proxy-config",
        env = "PROXY_CONFIG",
        default_value = "",
        hide_env_values = true
    )]
    pub proxy_config: String,

    /// Requests dispatched per one-second tick
    #[arg(
        long = "rate",
        env = "REQUEST_RATE",
        default_value_t = 10,
        value_parser = parse_positive_usize
    )]
    pub request_rate: usize,

    /// Comma-separated destination hostnames
    #[arg(
        long = "destinations",
        env = "DESTINATIONS",
        default_value = DEFAULT_DESTINATION
    )]
    pub destinations: String,

    /// Port for the metrics and health endpoints
    #[arg(long = "metrics-port", env = "METRICS_PORT", default_value_t = 8080)]
    pub metrics_port: u16,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl GeneratorArgs {
    /// Destination list with blank entries removed; never empty.
    #[must_use]
    pub fn destination_list(&self) -> Vec<String> {
        let destinations: Vec<String> = self
            .destinations
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect();

        if destinations.is_empty() {
            return vec![DEFAULT_DESTINATION.to_owned()];
        }
        destinations
    }
}

/// Crawler pod configuration.
#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Single-task crawler routed through the proxy pool, with static health/status endpoints."
)]
pub struct CrawlerArgs {
    /// Proxy pool configuration, one 'vendor:ip1,ip2,...[:port]' entry per line
    #[arg(
        long = "proxy-config",
        env = "PROXY_CONFIG",
        default_value = "",
        hide_env_values = true
    )]
    pub proxy_config: String,

    /// Port for the health and status endpoints
    #[arg(long = "port", env = "CRAWLER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
