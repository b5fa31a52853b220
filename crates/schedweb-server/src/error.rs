//! HTTP rendering of `SchedWebError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use schedweb_core::error::{ClientCode, SchedWebError};

/// Error wrapper returned by handlers.
///
/// The body is `{"error": "<public message>"}`; the internal detail only goes
/// to the log.
#[derive(Debug)]
pub struct ErrorResponse(pub SchedWebError);

impl From<SchedWebError> for ErrorResponse {
    fn from(e: SchedWebError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        match code {
            ClientCode::Internal => tracing::warn!(error = %self.0, "request failed"),
            _ => tracing::debug!(error = %self.0, code = code.as_str(), "request rejected"),
        }

        let status =
            StatusCode::from_u16(code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(json!({ "error": code.public_message() }));
        (status, body).into_response()
    }
}
