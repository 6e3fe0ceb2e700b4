//! HTTP service exposing the audit pipeline.

use crate::audit::audit_url;
use crate::config::ServerConfig;
use crate::fetcher::PageFetcher;
use crate::response::{AuditRequest, AuditResponse};
use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("invalid allowed origin: {0}")]
    InvalidOrigin(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Shared, immutable request state
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
}

/// Build the application router
pub fn build_app(fetcher: Arc<dyn PageFetcher>, config: &ServerConfig) -> Result<Router, ServerError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/audit", post(audit_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { fetcher });

    Ok(app)
}

/// Bind and serve until the process is stopped
pub async fn serve(fetcher: Arc<dyn PageFetcher>, config: &ServerConfig) -> Result<(), ServerError> {
    let app = build_app(fetcher, config)?;

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind.clone(),
            source,
        })?;
    tracing::info!("Listening on {}", config.bind);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn audit_handler(
    State(state): State<AppState>,
    Json(request): Json<AuditRequest>,
) -> Json<AuditResponse> {
    let report = audit_url(state.fetcher.as_ref(), &request.url).await;
    Json(AuditResponse::from(report))
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
