//! Handler panic recovery.
//!
//! Installed beneath the recorder, so a panicking handler still yields a
//! complete `500 {"error":"Internal server error"}` and is recorded with that
//! status.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use schedweb_core::error::SchedWebError;

use crate::error::ErrorResponse;

/// Response for a panic payload caught by `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    };

    ErrorResponse(SchedWebError::Internal(format!("handler panicked: {detail}"))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn any_payload_becomes_500() {
        assert_eq!(panic_response(Box::new("boom")).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            panic_response(Box::new(String::from("boom"))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(panic_response(Box::new(42u8)).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
