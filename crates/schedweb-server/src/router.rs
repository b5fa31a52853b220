//! Axum router wiring.
//!
//! `/healthz` and `/metrics` are fixed routes answering any method; every
//! other path falls through to the static handler. Panic recovery and the
//! recording middleware wrap all of them.

use axum::{middleware, routing::any, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{
    app_state::AppState,
    assets,
    dispatch::{self, HEALTHZ_PATH, METRICS_PATH},
    ops,
};

pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route(HEALTHZ_PATH, any(ops::healthz))
        .route(METRICS_PATH, any(ops::metrics))
        .fallback(assets::serve_static);
    with_request_layers(routes, state)
}

/// Wrap `routes` with panic recovery (inner) and request recording (outer),
/// then attach the state.
pub fn with_request_layers(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(CatchPanicLayer::custom(dispatch::panic_response))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            dispatch::record_request,
        ))
        .with_state(state)
}
