//! Per-request outcome samples and their Prometheus aggregation.
mod recorder;
mod types;


pub use recorder::MetricsRecorder;
pub use types::{MetricSample, Outcome};
