use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Proxy, StatusCode};
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::metrics::{MetricSample, MetricsRecorder, Outcome};
use crate::pool::{ProxyEndpoint, ProxyPool};

/// Total per-request deadline, covering connect, proxy handshake, and body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) const CLIENT_USER_AGENT: &str = "Crawler-Bot/1.0";
pub(crate) const HEADER_PROXY_VENDOR: &str = "X-Proxy-Vendor";
pub(crate) const HEADER_PROXY_IP: &str = "X-Proxy-IP";

/// A pool endpoint paired with the HTTP client that routes through it.
///
/// The client slot is `None` when the endpoint's address could not be turned
/// into a proxy at startup; dispatching through such an endpoint records an
/// error outcome instead of failing the process.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    pub endpoint: ProxyEndpoint,
    client: Option<Client>,
}

/// Executes single proxied requests and feeds every outcome to the recorder.
pub struct Dispatcher {
    clients: Vec<ProxyClient>,
    recorder: Arc<MetricsRecorder>,
}

impl Dispatcher {
    /// Build one proxied client per pool endpoint.
    #[must_use]
    pub fn new(pool: &ProxyPool, recorder: Arc<MetricsRecorder>, timeout: Duration) -> Self {
        let clients = pool
            .endpoints()
            .iter()
            .map(|endpoint| {
                let client = match build_proxy_client(endpoint, CLIENT_USER_AGENT, timeout) {
                    Ok(client) => Some(client),
                    Err(err) => {
                        warn!("Unusable proxy {}: {}", endpoint.proxy_url(), err);
                        None
                    }
                };
                ProxyClient {
                    endpoint: endpoint.clone(),
                    client,
                }
            })
            .collect();

        Self { clients, recorder }
    }

    #[must_use]
    pub fn clients(&self) -> &[ProxyClient] {
        &self.clients
    }

    /// Issue one proxied GET against `destination` and record the outcome.
    ///
    /// Never propagates a failure: connection errors, proxy refusals, and
    /// timeouts all become `Outcome::Error`. The response status code is
    /// logged but does not affect classification. Exactly one sample is
    /// recorded per call, with the wall-clock duration of the attempt.
    pub async fn dispatch(&self, proxy: &ProxyClient, destination: &str) -> MetricSample {
        let url = destination_url(destination);
        let start = Instant::now();

        let outcome = match execute(proxy, &url).await {
            Ok(status) => {
                info!(
                    "Request to {} via {} ({}) - Status: {}",
                    destination, proxy.endpoint.vendor, proxy.endpoint.ip, status
                );
                Outcome::Success
            }
            Err(err) => {
                error!("Request failed: {}", err);
                Outcome::Error
            }
        };

        let sample = MetricSample {
            vendor: proxy.endpoint.vendor.clone(),
            destination: destination.to_owned(),
            outcome,
            duration: start.elapsed(),
        };
        self.recorder.record(&sample);
        sample
    }
}

async fn execute(proxy: &ProxyClient, url: &str) -> Result<StatusCode, String> {
    let client = proxy
        .client
        .as_ref()
        .ok_or_else(|| format!("no usable client for proxy {}", proxy.endpoint.proxy_url()))?;

    let response = client
        .get(url)
        .header(HEADER_PROXY_VENDOR, proxy.endpoint.vendor.as_str())
        .header(HEADER_PROXY_IP, proxy.endpoint.ip.as_str())
        .send()
        .await
        .map_err(|err| format!("request error: {}", err))?;

    let status = response.status();
    // Draining the body keeps the attempt comparable across destinations and
    // lets read failures count as errors.
    response
        .bytes()
        .await
        .map_err(|err| format!("body read error: {}", err))?;

    Ok(status)
}

pub(crate) fn build_proxy_client(
    endpoint: &ProxyEndpoint,
    user_agent: &str,
    timeout: Duration,
) -> Result<Client, String> {
    let proxy =
        Proxy::all(endpoint.proxy_url()).map_err(|err| format!("invalid proxy URL: {}", err))?;
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .proxy(proxy)
        .build()
        .map_err(|err| format!("failed to build HTTP client: {}", err))
}

/// Deterministic URL shape per destination hostname.
pub(crate) fn destination_url(destination: &str) -> String {
    if destination == "httpbin.org" {
        format!("https://{}/json", destination)
    } else {
        format!("https://{}/get", destination)
    }
}
