//! Local stand-in for the hosting runtime: serve the resolved handle over TCP.

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::app::AppHandle;
use crate::settings::Settings;

/// Bind `settings.bind_addr` and serve `app` until Ctrl-C / SIGTERM.
pub async fn serve(settings: &Settings, app: &AppHandle) -> anyhow::Result<()> {
    let listener = TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        fallback = app.is_fallback(),
        "listening"
    );

    axum::serve(listener, http_router(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

/// Serve `app` on an already bound listener (no shutdown hook).
pub async fn serve_on(listener: TcpListener, app: &AppHandle) -> std::io::Result<()> {
    axum::serve(listener, http_router(app)).await
}

/// The handle's router plus per-request tracing spans.
pub fn http_router(app: &AppHandle) -> Router {
    app.router().layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for ctrl-c: {e}");
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
                tracing::warn!("failed to listen for SIGTERM: {e}");
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
}
