//! Per-request metrics recording.
//!
//! `record_request` runs around every route. It arms a [`RequestRecorder`]
//! whose `Drop` performs the single `observe` call, so the observation also
//! happens when the request future is dropped before a response exists
//! (client went away). Those requests are recorded as
//! [`CLIENT_CLOSED_REQUEST`] so they never count as handler failures. Handler
//! panics are turned into 500 responses by the recovery layer underneath, so
//! they arrive here as ordinary responses.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;
use crate::obs::HttpMetrics;

use super::route::RouteLabel;

/// Status recorded when no response was produced (nginx's 499).
pub const CLIENT_CLOSED_REQUEST: u16 = 499;

/// Scoped finalizer that records exactly one observation when dropped.
pub struct RequestRecorder {
    metrics: Arc<HttpMetrics>,
    label: RouteLabel,
    started: Instant,
    status: u16,
}

impl RequestRecorder {
    pub fn start(metrics: Arc<HttpMetrics>, label: RouteLabel) -> Self {
        Self {
            metrics,
            label,
            started: Instant::now(),
            status: CLIENT_CLOSED_REQUEST,
        }
    }

    /// Record with the final status. Consumes the recorder.
    pub fn finish(mut self, status: StatusCode) {
        self.status = status.as_u16();
    }
}

impl Drop for RequestRecorder {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f64();
        self.metrics.observe(self.label.as_str(), self.status, elapsed);
        tracing::trace!(
            route = self.label.as_str(),
            status = self.status,
            elapsed_secs = elapsed,
            "request recorded"
        );
    }
}

/// Middleware: time the request and record it under its route label.
pub async fn record_request(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let Some(label) = RouteLabel::classify(req.uri().path()) else {
        return next.run(req).await;
    };

    let recorder = RequestRecorder::start(state.metrics(), label);
    let res = next.run(req).await;
    recorder.finish(res.status());
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_without_finish_records_client_closed() {
        let metrics = Arc::new(HttpMetrics::new());
        drop(RequestRecorder::start(Arc::clone(&metrics), RouteLabel::Static));
        assert_eq!(metrics.counter("/", CLIENT_CLOSED_REQUEST), Some(1));
        assert_eq!(metrics.counter("/", 500), None);
    }

    #[test]
    fn finish_records_once_with_status() {
        let metrics = Arc::new(HttpMetrics::new());
        RequestRecorder::start(Arc::clone(&metrics), RouteLabel::Liveness).finish(StatusCode::OK);
        assert_eq!(metrics.counter("/healthz", 200), Some(1));
        assert_eq!(metrics.counter("/healthz", 500), None);
        assert_eq!(metrics.histogram("/healthz").map(|h| h.count), Some(1));
    }
}
