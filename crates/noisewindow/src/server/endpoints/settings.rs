//! Name and language settings endpoints.
//!
//! Neither slot is PIN-gated: the first-run name prompt and the language
//! toggle are viewer-facing flows.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::locale::Language;
use crate::server::types::ApiErrorType;
use crate::store::MAX_NAME_LEN;
use crate::types::AppState;

#[derive(Debug, Deserialize)]
pub struct NamePayload {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LanguagePayload {
    pub language: Language,
}

/// GET /settings/name
pub async fn get_name(State(s): State<Arc<AppState>>) -> Response {
    info!("GET /settings/name");

    let name = s.store.load_user_name();
    (StatusCode::OK, Json(json!({ "name": name }))).into_response()
}

/// PUT /settings/name
///
/// Sets the viewer display name. The value is trimmed; empty or oversized
/// names are rejected before the store is touched.
pub async fn put_name(
    State(s): State<Arc<AppState>>,
    Json(payload): Json<NamePayload>,
) -> Response {
    info!("PUT /settings/name");

    let trimmed = payload.name.trim();
    if trimmed.is_empty() {
        return ApiErrorType::from((
            StatusCode::UNPROCESSABLE_ENTITY,
            "Name must not be empty",
            None,
        ))
        .into_response();
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return ApiErrorType::from((
            StatusCode::UNPROCESSABLE_ENTITY,
            "Name too long",
            Some(format!("maximum length is {MAX_NAME_LEN} characters")),
        ))
        .into_response();
    }

    match s.store.save_user_name(trimmed) {
        Ok(saved) => (StatusCode::OK, Json(json!({ "name": saved }))).into_response(),
        Err(e) => {
            error!("Failed to persist name: {e}");
            ApiErrorType::from((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save name",
                Some(e.to_string()),
            ))
            .into_response()
        }
    }
}

/// GET /settings/language
pub async fn get_language(State(s): State<Arc<AppState>>) -> Response {
    info!("GET /settings/language");

    let language = s.store.load_language();
    (StatusCode::OK, Json(json!({ "language": language }))).into_response()
}

/// PUT /settings/language
///
/// Switches the display language. Unknown values fail JSON deserialization
/// and never reach the store.
pub async fn put_language(
    State(s): State<Arc<AppState>>,
    Json(payload): Json<LanguagePayload>,
) -> Response {
    info!("PUT /settings/language ({})", payload.language.as_str());

    match s.store.save_language(payload.language) {
        Ok(()) => {
            (StatusCode::OK, Json(json!({ "language": payload.language }))).into_response()
        }
        Err(e) => {
            error!("Failed to persist language: {e}");
            ApiErrorType::from((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save language",
                Some(e.to_string()),
            ))
            .into_response()
        }
    }
}
