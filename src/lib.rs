//! Core library for the `proxyload` binaries.
//!
//! This crate provides the building blocks shared by the load generator and
//! the crawler pod: proxy pool parsing, proxied request dispatch, the
//! fixed-rate batch loop, Prometheus metrics recording, and the HTTP
//! exposition endpoints.
pub mod args;
pub mod crawler;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod metrics;
pub mod pool;
pub mod service;
