//! Shared application state for the schedweb server.
//!
//! The metrics registry is built here, once per process, and handed to the
//! router through this state. Nothing else holds it.

use std::sync::Arc;

use schedweb_core::error::Result;

use crate::assets::StaticAssets;
use crate::config::ServerConfig;
use crate::obs::HttpMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<HttpMetrics>,
}

struct AppStateInner {
    cfg: ServerConfig,
    assets: StaticAssets,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        cfg.validate()?;

        let assets = StaticAssets::new(cfg.static_root.clone());
        if !assets.root().is_dir() {
            // every static request will 404 until the directory appears
            tracing::warn!(root = %assets.root().display(), "static root is not a directory");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, assets }),
            metrics: Arc::new(HttpMetrics::new()),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn assets(&self) -> &StaticAssets {
        &self.inner.assets
    }

    pub fn metrics(&self) -> Arc<HttpMetrics> {
        Arc::clone(&self.metrics)
    }
}
