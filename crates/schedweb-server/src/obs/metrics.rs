//! HTTP request metrics registry.
//!
//! Two families are kept per route label: a request counter split by status
//! code and a latency histogram. Routes and statuses render in first-seen
//! order. All tables sit behind one mutex so the counter and histogram of an
//! observation move together; critical sections are a few integer updates.

use std::fmt::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;

/// Histogram upper bounds in seconds, shared by every route.
pub const BUCKETS_SECONDS: [f64; 14] = [
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

const REQUESTS_TOTAL: &str = "http_requests_total";
const REQUEST_DURATION: &str = "http_request_duration_seconds";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Point-in-time copy of one route's histogram.
///
/// `buckets[i]` counts observations whose first matching bound was
/// `BUCKETS_SECONDS[i]` (not cumulative).
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSnapshot {
    pub buckets: [u64; BUCKETS_SECONDS.len()],
    pub overflow: u64,
    pub sum: f64,
    pub count: u64,
}

#[derive(Debug, Default)]
struct Histogram {
    buckets: [u64; BUCKETS_SECONDS.len()],
    overflow: u64,
    sum: f64,
    count: u64,
}

impl Histogram {
    fn observe(&mut self, duration_secs: f64) {
        self.sum += duration_secs;
        self.count += 1;
        match BUCKETS_SECONDS.iter().position(|&le| duration_secs <= le) {
            Some(i) => self.buckets[i] += 1,
            None => self.overflow += 1,
        }
    }

    fn snapshot(&self) -> HistogramSnapshot {
        HistogramSnapshot {
            buckets: self.buckets,
            overflow: self.overflow,
            sum: self.sum,
            count: self.count,
        }
    }
}

type StatusRow = IndexMap<u16, u64>;

/// Both tables iterate in first-seen order.
#[derive(Debug, Default)]
struct Tables {
    requests: IndexMap<String, StatusRow>,
    histograms: IndexMap<String, Histogram>,
}

impl Tables {
    /// Get-or-create the status row for `route`.
    fn status_row(&mut self, route: &str) -> &mut StatusRow {
        let idx = match self.requests.get_index_of(route) {
            Some(i) => i,
            None => self.requests.insert_full(route.to_string(), StatusRow::new()).0,
        };
        &mut self.requests[idx]
    }

    /// Get-or-create the zeroed histogram for `route`.
    fn histogram(&mut self, route: &str) -> &mut Histogram {
        let idx = match self.histograms.get_index_of(route) {
            Some(i) => i,
            None => self.histograms.insert_full(route.to_string(), Histogram::default()).0,
        };
        &mut self.histograms[idx]
    }
}

/// Process-wide request metrics. Construct once and share via `Arc`.
#[derive(Debug, Default)]
pub struct HttpMetrics {
    tables: Mutex<Tables>,
}

impl HttpMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock leaves integer tables that are still
    // usable, so poisoning is ignored instead of surfaced.
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record one completed request.
    pub fn observe(&self, route: &str, status: u16, duration_secs: f64) {
        let mut tables = self.lock();

        *tables.status_row(route).entry(status).or_insert(0) += 1;

        tables.histogram(route).observe(duration_secs);
    }

    /// Requests seen for `(route, status)`; `None` if never observed.
    pub fn counter(&self, route: &str, status: u16) -> Option<u64> {
        let tables = self.lock();
        tables.requests.get(route).and_then(|row| row.get(&status)).copied()
    }

    /// Histogram snapshot for `route`; `None` if never observed.
    pub fn histogram(&self, route: &str) -> Option<HistogramSnapshot> {
        let tables = self.lock();
        tables.histograms.get(route).map(Histogram::snapshot)
    }

    /// Render in Prometheus text exposition format (version 0.0.4).
    pub fn render(&self) -> String {
        let tables = self.lock();
        let mut out = String::new();

        let _ = writeln!(out, "# HELP {REQUESTS_TOTAL} Total HTTP requests");
        let _ = writeln!(out, "# TYPE {REQUESTS_TOTAL} counter");
        for (route, row) in &tables.requests {
            let route = escape_label(route);
            for (status, n) in row {
                let _ = writeln!(out, "{REQUESTS_TOTAL}{{route=\"{route}\",status=\"{status}\"}} {n}");
            }
        }

        let _ = writeln!(out, "# HELP {REQUEST_DURATION} Request latency in seconds");
        let _ = writeln!(out, "# TYPE {REQUEST_DURATION} histogram");
        for (route, hist) in &tables.histograms {
            let route = escape_label(route);
            let mut cumulative = 0u64;
            for (le, n) in BUCKETS_SECONDS.iter().zip(hist.buckets.iter()) {
                cumulative += n;
                let _ = writeln!(
                    out,
                    "{REQUEST_DURATION}_bucket{{route=\"{route}\",le=\"{le}\"}} {cumulative}"
                );
            }
            cumulative += hist.overflow;
            let _ = writeln!(
                out,
                "{REQUEST_DURATION}_bucket{{route=\"{route}\",le=\"+Inf\"}} {cumulative}"
            );
            let _ = writeln!(out, "{REQUEST_DURATION}_sum{{route=\"{route}\"}} {:.6}", hist.sum);
            let _ = writeln!(out, "{REQUEST_DURATION}_count{{route=\"{route}\"}} {}", hist.count);
        }

        out
    }
}
