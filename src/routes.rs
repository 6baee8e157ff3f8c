//! API routes

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{FromRequest, Request, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use prompt_core::{Error, PromptReport};
use prompt_engine::{INVALID_PROMPT, normalize_value};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::server::AppState;

type AppStateArc = Arc<AppState>;

#[derive(Serialize)]
struct ImproveResponse {
    success: bool,
    data: PromptReport,
}

#[derive(Serialize)]
struct FailureResponse {
    success: bool,
    error: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

fn error_response(status: StatusCode, error: &str, message: Option<String>) -> Response {
    let body = ErrorResponse {
        error: error.to_string(),
        message,
    };
    (status, Json(body)).into_response()
}

fn invalid_prompt() -> Response {
    error_response(StatusCode::BAD_REQUEST, INVALID_PROMPT, None)
}

/// 500 response for failures outside the improve pipeline
pub fn internal_error(detail: String, development: bool) -> Response {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
        development.then_some(detail),
    )
}

/// Convert a handler panic into a 500 response
pub fn panic_response(panic: Box<dyn Any + Send + 'static>, development: bool) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    error!(%detail, "Unhandled error");
    internal_error(detail, development)
}

// ============================================================================
// Prompt Routes
// ============================================================================

pub fn prompt_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/prompt/improve", post(improve_prompt))
        .route("/api/prompt/health", get(prompt_health))
}

fn is_form(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

fn rejected(detail: String, development: bool) -> Response {
    error!(error = %detail, "Unhandled error");
    internal_error(detail, development)
}

/// Read a JSON or url-encoded body into a JSON object
async fn read_body(state: &AppStateArc, request: Request) -> Result<Value, Response> {
    let development = state.config.is_development();

    if is_form(&request) {
        return match Form::<HashMap<String, String>>::from_request(request, state).await {
            Ok(Form(fields)) => Ok(fields
                .into_iter()
                .map(|(name, value)| (name, Value::String(value)))
                .collect()),
            Err(rejection) => Err(rejected(rejection.body_text(), development)),
        };
    }

    match Json::<Value>::from_request(request, state).await {
        Ok(Json(body)) => Ok(body),
        // A body of any other type carries no prompt.
        Err(JsonRejection::MissingJsonContentType(_)) => Err(invalid_prompt()),
        Err(rejection) => Err(rejected(rejection.body_text(), development)),
    }
}

async fn improve_prompt(State(state): State<AppStateArc>, request: Request) -> Response {
    let body = match read_body(&state, request).await {
        Ok(body) => body,
        Err(response) => return response,
    };

    let prompt = normalize_value(body.get("prompt").unwrap_or(&Value::Null));
    if prompt.is_empty() {
        return invalid_prompt();
    }

    info!(words = prompt.split_whitespace().count(), "  Improving prompt");

    match state.improver.process(&prompt).await {
        Ok(report) => (
            StatusCode::OK,
            Json(ImproveResponse {
                success: true,
                data: report,
            }),
        )
            .into_response(),
        Err(Error::InvalidInput(_)) => invalid_prompt(),
        Err(e) => {
            error!(error = %e, "  Prompt improvement failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse {
                    success: false,
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn prompt_health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "healthy",
        timestamp: None,
    })
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        timestamp: Some(chrono::Utc::now().to_rfc3339()),
    })
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Route not found", None)
}
