//! Proxied request execution and the fixed-rate batch loop.
mod dispatcher;
mod generator;


pub use dispatcher::{Dispatcher, ProxyClient, REQUEST_TIMEOUT};
pub use generator::RateController;

pub(crate) use dispatcher::{HEADER_PROXY_IP, HEADER_PROXY_VENDOR, build_proxy_client};
