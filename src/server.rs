//! HTTP endpoint for password analysis.
//!
//! `POST /password/analyze?password=...` returns the [`AnalysisResult`] as
//! JSON. Requests that cannot be unpacked get a 500 with `{"error": ...}`.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyzer::PasswordAnalyzer;
use crate::config::ServerConfig;
use crate::result::AnalysisResult;

#[derive(Deserialize)]
struct AnalyzeQuery {
    password: String,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(#[from] QueryRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Error processing request: {}", self);
        let body = ErrorBody { error: self.to_string() };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Builds the router with the given analyzer as shared state.
pub fn router(analyzer: PasswordAnalyzer) -> Router {
    Router::new()
        .route("/password/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .with_state(analyzer)
}

/// Binds `config.addr` and serves until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = config.build_analyzer()?;
    let app = router(analyzer);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("Password analyzer listening on http://{}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Password analyzer stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn analyze_handler(
    State(analyzer): State<PasswordAnalyzer>,
    query: Result<Query<AnalyzeQuery>, QueryRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Query(AnalyzeQuery { password }) = query?;
    let password = SecretString::new(password.into());

    let result = analyzer.analyze(&password);
    tracing::debug!(
        score = result.strength_score(),
        category = %result.strength_category(),
        "password analyzed"
    );

    Ok(Json(result))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
