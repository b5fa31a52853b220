//! Shared error type across schedweb crates.

use std::io;

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Requested asset does not exist.
    NotFound,
    /// Invalid input (bad config value, malformed request).
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// Stable machine-readable representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// Message placed in JSON error bodies. Never carries internal detail.
    pub fn public_message(self) -> &'static str {
        match self {
            ClientCode::NotFound => "Not found",
            ClientCode::BadRequest => "Bad request",
            ClientCode::Internal => "Internal server error",
        }
    }

    /// HTTP status code paired with this client code.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::NotFound => 404,
            ClientCode::BadRequest => 400,
            ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SchedWebError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum SchedWebError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SchedWebError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SchedWebError::NotFound(_) => ClientCode::NotFound,
            SchedWebError::BadRequest(_) => ClientCode::BadRequest,
            SchedWebError::Internal(_) => ClientCode::Internal,
        }
    }
}

impl From<io::Error> for SchedWebError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => SchedWebError::NotFound(e.to_string()),
            _ => SchedWebError::Internal(e.to_string()),
        }
    }
}
