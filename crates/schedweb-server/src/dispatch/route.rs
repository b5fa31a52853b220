//! Coarse route labels used as the `route` metrics dimension.

/// Liveness check path.
pub const HEALTHZ_PATH: &str = "/healthz";
/// Metrics scrape path. Requests here are never recorded.
pub const METRICS_PATH: &str = "/metrics";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLabel {
    /// Everything served from the static root.
    Static,
    /// `/healthz`.
    Liveness,
}

impl RouteLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteLabel::Static => "/",
            RouteLabel::Liveness => HEALTHZ_PATH,
        }
    }

    /// Label for a request path, or `None` for the metrics endpoint.
    pub fn classify(path: &str) -> Option<Self> {
        match path {
            METRICS_PATH => None,
            HEALTHZ_PATH => Some(RouteLabel::Liveness),
            _ => Some(RouteLabel::Static),
        }
    }
}
