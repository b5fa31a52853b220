//! schedweb server
//!
//! - static files from `static_root` (`/` -> `/index.html`)
//! - `/healthz` liveness, `/metrics` Prometheus text
//! - port from `PORT` (default 3000)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use schedweb_core::error::{Result, SchedWebError};
use schedweb_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "schedweb-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let state = app_state::AppState::new(config::load()?)?;
    let listen = state.cfg().listen_addr()?;
    let root = state.assets().root().display().to_string();
    let app = router::build_router(state);

    tracing::info!(%listen, %root, "schedweb-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| SchedWebError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SchedWebError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
