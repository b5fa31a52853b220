//! Static file serving beneath the configured root.

use std::path::{Path, PathBuf};

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use schedweb_core::assets::{
    cache_control_for, content_type_for, normalize_request_path, resolve_under,
};
use schedweb_core::error::Result;

use crate::app_state::AppState;
use crate::error::ErrorResponse;

/// A file loaded from the static root.
#[derive(Debug)]
pub struct Asset {
    pub body: Vec<u8>,
    pub content_type: &'static str,
    pub cache_control: &'static str,
}

impl IntoResponse for Asset {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, self.content_type),
                (header::CACHE_CONTROL, self.cache_control),
            ],
            self.body,
        )
            .into_response()
    }
}

/// Stateless file lookup rooted at one directory.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the file addressed by a raw (still percent-encoded) request path.
    ///
    /// A missing file is `NotFound`; every other I/O failure, a directory
    /// included, is `Internal`.
    pub async fn load(&self, raw_path: &str) -> Result<Asset> {
        let normalized = normalize_request_path(raw_path)?;
        let path = resolve_under(&self.root, &normalized)?;
        let body = tokio::fs::read(&path).await?;

        let content_type = content_type_for(&path);
        Ok(Asset {
            body,
            content_type,
            cache_control: cache_control_for(content_type),
        })
    }
}

/// Fallback handler: everything that is not an ops endpoint.
pub async fn serve_static(State(state): State<AppState>, uri: Uri) -> Response {
    match state.assets().load(uri.path()).await {
        Ok(asset) => asset.into_response(),
        Err(e) => ErrorResponse::from(e).into_response(),
    }
}
