//! Counters for provider calls and relay outcomes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the provider client and the relay handler.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// Outbound provider HTTP requests
    http_requests_total: Arc<AtomicU64>,

    /// Outbound requests that failed (any cause)
    http_errors_total: Arc<AtomicU64>,

    http_duration_total_ms: Arc<AtomicU64>,

    /// Submissions that reached the relay endpoint
    submissions_received: Arc<AtomicU64>,

    /// Submissions accepted by the provider
    submissions_delivered: Arc<AtomicU64>,

    /// Submissions refused by validation or by the provider (HTTP 400)
    submissions_rejected: Arc<AtomicU64>,

    /// Submissions that hit an unexpected failure (HTTP 500)
    submissions_failed: Arc<AtomicU64>,
}

/// Final state of one relayed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    Delivered,
    Rejected,
    Failed,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_received(&self) {
        self.submissions_received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_outcome(&self, outcome: RelayOutcome) {
        let counter = match outcome {
            RelayOutcome::Delivered => &self.submissions_delivered,
            RelayOutcome::Rejected => &self.submissions_rejected,
            RelayOutcome::Failed => &self.submissions_failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms();
        let count = self.http_requests_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn submissions_received(&self) -> u64 {
        self.submissions_received.load(Ordering::Relaxed)
    }

    pub fn submissions_delivered(&self) -> u64 {
        self.submissions_delivered.load(Ordering::Relaxed)
    }

    pub fn submissions_rejected(&self) -> u64 {
        self.submissions_rejected.load(Ordering::Relaxed)
    }

    pub fn submissions_failed(&self) -> u64 {
        self.submissions_failed.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            submissions_received: self.submissions_received(),
            submissions_delivered: self.submissions_delivered(),
            submissions_rejected: self.submissions_rejected(),
            submissions_failed: self.submissions_failed(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub submissions_received: u64,
    pub submissions_delivered: u64,
    pub submissions_rejected: u64,
    pub submissions_failed: u64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_http_request(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_http_request(self.start.elapsed());
        self.metrics.record_http_error();
    }
}
