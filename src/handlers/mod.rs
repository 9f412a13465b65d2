//! HTTP handlers for the inbound API surface.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::error::CodeMentorError;
use crate::models::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::service::GenerationService;
use crate::validation::InputValidator;

/// Shared application state for all route handlers
pub struct AppState {
    pub service: GenerationService,
    pub validator: InputValidator,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(cfg: &Config) -> Self {
        Self {
            service: GenerationService::new(cfg),
            validator: InputValidator::new(&cfg.limits),
            started_at: Instant::now(),
        }
    }
}

/// POST /api/code/generate
///
/// Validation failures are the only 400s; everything past validation is a
/// 200 with whatever the fallback chain produced.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let raw = match payload {
        Ok(Json(body)) => body.prompt.unwrap_or_default(),
        Err(rejection) => {
            // A malformed body reports through the same path as a missing
            // prompt
            tracing::debug!("rejected request body: {rejection}");
            String::new()
        }
    };

    let prompt = match state.validator.validate_prompt(&raw) {
        Ok(prompt) => prompt,
        Err(err) => return validation_failure(err),
    };

    tracing::info!("received prompt ({} chars)", prompt.chars().count());

    match state.service.generate(&prompt).await {
        Ok(result) => (
            StatusCode::OK,
            Json(GenerateResponse {
                success: true,
                code: result.text,
                source: result.source,
            }),
        )
            .into_response(),
        Err(err) => validation_failure(err),
    }
}

/// GET /api/code/health
pub async fn api_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "message": "Code API is running",
        "timestamp": now_rfc3339(),
    }))
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "timestamp": now_rfc3339(),
        "uptime": state.started_at.elapsed().as_secs(),
    }))
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn validation_failure(err: CodeMentorError) -> Response {
    let (error, details) = match err {
        CodeMentorError::Validation { message, details } => (message, details),
        other => (other.to_string(), Vec::new()),
    };
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            success: false,
            error,
            details,
        }),
    )
        .into_response()
}
