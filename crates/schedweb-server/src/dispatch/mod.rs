//! Request dispatch: route classification, panic recovery and the recording
//! middleware.
//!
//! Each request goes `START -> {LIVENESS | METRICS | STATIC} -> RECORD -> END`.
//! The branch is taken by the router; recording wraps it.

pub mod recorder;
pub mod recover;
pub mod route;

pub use recorder::{record_request, RequestRecorder, CLIENT_CLOSED_REQUEST};
pub use recover::panic_response;
pub use route::{RouteLabel, HEALTHZ_PATH, METRICS_PATH};
