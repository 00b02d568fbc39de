use std::time::Duration;

/// Success/error classification of one dispatched request.
///
/// Classification is transport-level only: an HTTP response of any status
/// counts as success, while connection failures and timeouts count as error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Error => "error",
        }
    }
}

/// Emitted exactly once per attempted request, regardless of outcome.
#[derive(Debug, Clone)]
pub struct MetricSample {
    pub vendor: String,
    pub destination: String,
    pub outcome: Outcome,
    pub duration: Duration,
}
