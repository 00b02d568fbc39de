use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

use super::types::{MetricSample, Outcome};

/// Concurrent sink for request samples, backed by an owned Prometheus
/// registry.
///
/// One instance is created at startup and shared across all in-flight
/// dispatches; the underlying counter and histogram vectors are atomic, so
/// `record` needs no locking.
pub struct MetricsRecorder {
    registry: Registry,
    requests: IntCounterVec,
    durations: HistogramVec,
}

impl MetricsRecorder {
    /// Create a recorder with its metric families registered.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric family cannot be created or registered.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("load_gen_requests_total", "Total requests sent"),
            &["proxy_vendor", "destination", "status"],
        )?;
        let durations = HistogramVec::new(
            HistogramOpts::new("load_gen_request_duration_seconds", "Request duration"),
            &["proxy_vendor", "destination"],
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(durations.clone()))?;

        Ok(Self {
            registry,
            requests,
            durations,
        })
    }

    /// Record one sample: bump the outcome counter and observe the duration.
    pub fn record(&self, sample: &MetricSample) {
        self.requests
            .with_label_values(&[
                sample.vendor.as_str(),
                sample.destination.as_str(),
                sample.outcome.as_str(),
            ])
            .inc();
        self.durations
            .with_label_values(&[sample.vendor.as_str(), sample.destination.as_str()])
            .observe(sample.duration.as_secs_f64());
    }

    /// Accumulated request count for one label triple.
    #[must_use]
    pub fn request_count(&self, vendor: &str, destination: &str, outcome: Outcome) -> u64 {
        self.requests
            .with_label_values(&[vendor, destination, outcome.as_str()])
            .get()
    }

    /// Number of duration observations for one (vendor, destination) pair.
    #[must_use]
    pub fn duration_count(&self, vendor: &str, destination: &str) -> u64 {
        self.durations
            .with_label_values(&[vendor, destination])
            .get_sample_count()
    }

    /// Render the registry in the Prometheus text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric family cannot be encoded.
    pub fn encode_text(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buf = String::new();
        encoder.encode_utf8(&self.registry.gather(), &mut buf)?;
        Ok(buf)
    }
}
