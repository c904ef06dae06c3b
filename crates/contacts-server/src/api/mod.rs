//! Router assembly and server lifecycle

pub mod response;

use std::{future::IntoFuture, time::Duration};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::{net::TcpListener, signal, sync::oneshot};
use tower_http::compression::CompressionLayer;

use crate::config::Config;
use crate::error::AppError;
use crate::features::{self, FeatureState};
use crate::middleware;

/// Full application: `/health`, the `/api` features, the 404 fallback and
/// the middleware stack.
pub fn create_router(state: FeatureState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state.clone())
        .nest("/api", features::router(state))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

async fn health_check(State(state): State<FeatureState>) -> Response {
    match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "database": "connected" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "database": "disconnected" })),
            )
                .into_response()
        },
    }
}

async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

/// Serves `app` until Ctrl+C or SIGTERM, then lets in-flight requests finish
/// for at most `shutdown_timeout`.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown_timeout: Duration,
) -> anyhow::Result<()> {
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let mut server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                let _ = signalled_tx.send(());
            })
            .into_future(),
    );

    tokio::select! {
        result = &mut server => return Ok(result??),
        _ = signalled_rx => {},
    }

    tracing::info!(
        timeout_secs = shutdown_timeout.as_secs(),
        "Waiting for open connections to close"
    );
    match tokio::time::timeout(shutdown_timeout, &mut server).await {
        Ok(result) => result??,
        Err(_) => {
            tracing::warn!("Shutdown timeout elapsed, dropping remaining connections");
            server.abort();
        },
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received terminate signal, starting graceful shutdown"),
    }
}
