//! HTTP spell-check endpoint.
//!
//! One route, `POST /check`, taking `{"text": "..."}` and answering
//! `{"errors": [...]}` with the words the dictionary does not know.
//!
//! The server is a presentation layer: it parses the request, hands the text
//! to [`DictionaryStore::check`] and shapes the answer. Failures surface as
//! exactly two payloads:
//!
//! - `400 {"error": "No 'text' field provided"}` when the body is empty, is
//!   not a JSON object, or has no `text` key
//! - `500 {"error": "An internal server error occurred"}` for anything else,
//!   including malformed JSON and a `text` that is not a string. The detail
//!   goes to the log, never to the caller

use std::any::Any;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use bangla_spell_core::DictionaryStore;

/// Message returned when the request has no `text` field.
pub const MISSING_TEXT_MESSAGE: &str = "No 'text' field provided";

/// Message returned for any internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";

/// Successful check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Unknown words, each once, in order of first appearance.
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

/// Request failures, as seen by the caller.
#[derive(Debug)]
pub enum ApiError {
    /// The body has no `text` string.
    MissingText,
    /// Anything else. The detail is logged, not returned.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::MissingText => (StatusCode::BAD_REQUEST, MISSING_TEXT_MESSAGE),
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Build the application router.
///
/// `body_limit` caps request bodies in bytes; `None` removes the cap.
pub fn router(store: Arc<DictionaryStore>, body_limit: Option<usize>) -> Router {
    let routes = Router::new()
        .route("/check", post(check_text))
        .with_state(store);
    with_layers(routes, body_limit)
}

fn with_layers(routes: Router, body_limit: Option<usize>) -> Router {
    let limit = body_limit.map_or_else(DefaultBodyLimit::disable, DefaultBodyLimit::max);
    routes
        .layer(limit)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[tracing::instrument(skip_all, fields(body_len = body.len()))]
async fn check_text(
    State(store): State<Arc<DictionaryStore>>,
    body: Bytes,
) -> Result<Json<CheckResponse>, ApiError> {
    let text = parse_text(&body)?;

    let errors = tokio::task::spawn_blocking(move || store.check(&text))
        .await
        .map_err(|e| ApiError::Internal(format!("check task failed: {e}")))?;

    tracing::debug!(misspelled = errors.len(), "check completed");
    Ok(Json(CheckResponse { errors }))
}

/// Pull the `text` string out of a JSON object body.
fn parse_text(body: &[u8]) -> Result<String, ApiError> {
    if body.trim_ascii().is_empty() {
        return Err(ApiError::MissingText);
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::Internal(format!("malformed request body: {e}")))?;
    let text = match value {
        Value::Object(mut fields) => fields.remove("text"),
        _ => None,
    };
    match text {
        None => Err(ApiError::MissingText),
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(ApiError::Internal(format!(
            "'text' is not a string: {other}"
        ))),
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
