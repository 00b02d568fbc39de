//! Single-task crawler variant.
//!
//! Shares the load generator's proxy pool format but issues one request at a
//! time with a randomized delay, logging outcomes instead of recording
//! metrics.
use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use reqwest::Client;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::http::{HEADER_PROXY_IP, HEADER_PROXY_VENDOR, build_proxy_client};
use crate::pool::{ProxyEndpoint, ProxyPool};

pub(crate) const CRAWLER_USER_AGENT: &str = "Crawler-Pod/1.0";
pub(crate) const CRAWL_TIMEOUT: Duration = Duration::from_secs(10);
const HEADER_FORWARDED_FOR: &str = "X-Forwarded-For";
const MIN_DELAY_SECS: u64 = 5;
const MAX_DELAY_SECS: u64 = 15;

/// Fixed targets the crawler cycles through at random.
pub const CRAWL_DESTINATIONS: [&str; 3] = [
    "httpbin.org/json",
    "jsonplaceholder.typicode.com/posts/1",
    "httpstat.us/200",
];

#[derive(Debug)]
struct CrawlClient {
    endpoint: ProxyEndpoint,
    client: Option<Client>,
}

/// Sequential crawl loop over the proxy pool.
#[derive(Debug)]
pub struct Crawler {
    clients: Vec<CrawlClient>,
}

impl Crawler {
    #[must_use]
    pub fn new(pool: &ProxyPool) -> Self {
        let clients = pool
            .endpoints()
            .iter()
            .map(|endpoint| {
                let client = match build_proxy_client(endpoint, CRAWLER_USER_AGENT, CRAWL_TIMEOUT) {
                    Ok(client) => Some(client),
                    Err(err) => {
                        warn!("Unusable proxy {}: {}", endpoint.proxy_url(), err);
                        None
                    }
                };
                CrawlClient {
                    endpoint: endpoint.clone(),
                    client,
                }
            })
            .collect();

        Self { clients }
    }

    #[must_use]
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    /// Crawl forever with a randomized delay between requests.
    pub async fn run(self) {
        loop {
            let (proxy, destination, delay) = {
                let mut rng = rand::thread_rng();
                let proxy = self.clients.choose(&mut rng);
                let destination = CRAWL_DESTINATIONS
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or("httpbin.org/json");
                (proxy, destination, crawl_delay(&mut rng))
            };

            if let Some(proxy) = proxy {
                crawl_once(proxy, destination).await;
            }

            sleep(delay).await;
        }
    }
}

async fn crawl_once(proxy: &CrawlClient, destination: &str) {
    let Some(client) = proxy.client.as_ref() else {
        error!(
            "Crawl failed: no usable client for proxy {}",
            proxy.endpoint.proxy_url()
        );
        return;
    };

    let url = format!("https://{}", destination);
    let result = client
        .get(&url)
        .header(HEADER_PROXY_VENDOR, proxy.endpoint.vendor.as_str())
        .header(HEADER_PROXY_IP, proxy.endpoint.ip.as_str())
        .header(HEADER_FORWARDED_FOR, proxy.endpoint.ip.as_str())
        .send()
        .await;

    match result {
        Ok(response) => info!(
            "Crawled {} via {} - Status: {}",
            destination,
            proxy.endpoint.vendor,
            response.status()
        ),
        Err(err) => error!("Crawl failed: {}", err),
    }
}

fn crawl_delay(rng: &mut impl Rng) -> Duration {
    Duration::from_secs(rng.gen_range(MIN_DELAY_SECS..=MAX_DELAY_SECS))
}
