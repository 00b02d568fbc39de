//! Proxy pool configuration parsing.
//!
//! The pool is parsed once at startup from free-form configuration text and
//! is read-only afterwards, so selection never needs synchronization.

pub(crate) const DEFAULT_PROXY_PORT: &str = "8080";

/// One proxy a request can be routed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEndpoint {
    pub vendor: String,
    pub ip: String,
    pub port: String,
}

impl ProxyEndpoint {
    /// The address requests are proxied through.
    #[must_use]
    pub fn proxy_url(&self) -> String {
        format!("http://{}:{}", self.ip, self.port)
    }
}

/// A non-empty collection of proxy endpoints.
#[derive(Debug, Clone)]
pub struct ProxyPool {
    endpoints: Vec<ProxyEndpoint>,
}

impl ProxyPool {
    /// Parse pool configuration text into endpoints.
    ///
    /// Each line has the form `vendor:ip1,ip2,...[:port]`; the port defaults
    /// to 8080 and one endpoint is emitted per listed IP. Lines without a
    /// colon are skipped. Parsing never fails: when nothing usable remains,
    /// the pool holds a single loopback endpoint so callers can always
    /// select with replacement.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut endpoints = Vec::new();

        for line in raw.trim().lines() {
            let Some((vendor, rest)) = line.split_once(':') else {
                continue;
            };
            let (ips, port) = match rest.split_once(':') {
                // Anything past a third colon is ignored, matching the
                // deployed config format.
                Some((ips, more)) => (ips, more.split(':').next().unwrap_or(DEFAULT_PROXY_PORT)),
                None => (rest, DEFAULT_PROXY_PORT),
            };

            for ip in ips.split(',') {
                endpoints.push(ProxyEndpoint {
                    vendor: vendor.to_owned(),
                    ip: ip.trim().to_owned(),
                    port: port.to_owned(),
                });
            }
        }

        if endpoints.is_empty() {
            endpoints.push(ProxyEndpoint {
                vendor: "default".to_owned(),
                ip: "127.0.0.1".to_owned(),
                port: DEFAULT_PROXY_PORT.to_owned(),
            });
        }

        Self { endpoints }
    }

    #[must_use]
    pub fn endpoints(&self) -> &[ProxyEndpoint] {
        &self.endpoints
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(vendor: &str, ip: &str, port: &str) -> ProxyEndpoint {
        ProxyEndpoint {
            vendor: vendor.to_owned(),
            ip: ip.to_owned(),
            port: port.to_owned(),
        }
    }

    #[test]
    fn one_endpoint_per_ip_sharing_vendor_and_port() {
        let pool = ProxyPool::parse("acme:1.1.1.1,2.2.2.2:9090");
        assert_eq!(
            pool.endpoints(),
            &[
                endpoint("acme", "1.1.1.1", "9090"),
                endpoint("acme", "2.2.2.2", "9090"),
            ]
        );
    }

    #[test]
    fn port_defaults_when_omitted() {
        let pool = ProxyPool::parse("acme:3.3.3.3");
        assert_eq!(pool.endpoints(), &[endpoint("acme", "3.3.3.3", "8080")]);
    }

    #[test]
    fn empty_input_falls_back_to_default_endpoint() {
        let pool = ProxyPool::parse("");
        assert_eq!(pool.endpoints(), &[endpoint("default", "127.0.0.1", "8080")]);
    }

    #[test]
    fn lines_without_colon_are_dropped_not_merged() {
        let pool = ProxyPool::parse("garbage-no-colon\nacme:3.3.3.3");
        assert_eq!(pool.endpoints(), &[endpoint("acme", "3.3.3.3", "8080")]);
    }

    #[test]
    fn ip_whitespace_is_trimmed() {
        let pool = ProxyPool::parse("acme: 1.1.1.1 , 2.2.2.2 :9090");
        assert_eq!(
            pool.endpoints(),
            &[
                endpoint("acme", "1.1.1.1", "9090"),
                endpoint("acme", "2.2.2.2", "9090"),
            ]
        );
    }

    #[test]
    fn segments_past_the_port_are_ignored() {
        let pool = ProxyPool::parse("acme:1.1.1.1:9090:unused");
        assert_eq!(pool.endpoints(), &[endpoint("acme", "1.1.1.1", "9090")]);
    }

    #[test]
    fn multiple_vendors_accumulate_in_order() {
        let pool = ProxyPool::parse("acme:1.1.1.1\nglobex:2.2.2.2,3.3.3.3:3128");
        assert_eq!(
            pool.endpoints(),
            &[
                endpoint("acme", "1.1.1.1", "8080"),
                endpoint("globex", "2.2.2.2", "3128"),
                endpoint("globex", "3.3.3.3", "3128"),
            ]
        );
    }

    #[test]
    fn parse_never_returns_an_empty_pool() {
        let inputs = ["", "\n\n", "no-colon", "also no colon\nstill none", "   "];
        for input in inputs {
            let pool = ProxyPool::parse(input);
            assert!(!pool.is_empty(), "empty pool for input {:?}", input);
        }
    }

    #[test]
    fn proxy_url_joins_ip_and_port() {
        let target = endpoint("acme", "10.0.0.1", "3128");
        assert_eq!(target.proxy_url(), "http://10.0.0.1:3128");
    }
}
