//! Lightweight in-process metrics.
//!
//! Request counters and latency histograms are kept in memory and rendered
//! by the `/metrics` handler in Prometheus text format.

pub mod metrics;

pub use metrics::{HistogramSnapshot, HttpMetrics, BUCKETS_SECONDS};
