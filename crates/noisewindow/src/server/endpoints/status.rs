//! Viewer-facing status endpoints.
//!
//! These recompute the status on every request; together with the 30-second
//! client poll this keeps displayed countdowns from drifting.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::schedule::{compute_status, greeting};
use crate::server::util::{resolve_language, LocaleQuery};
use crate::types::AppState;

/// GET /health
pub async fn get_health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

/// GET /status
///
/// Returns the current availability status, its localized label, and the
/// greeting line for the viewer page.
pub async fn get_status(
    State(s): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
) -> Response {
    let language = resolve_language(&s, &query);
    info!("GET /status (lang={})", language.as_str());

    let t = language.translations();
    let now = Local::now().time();
    let schedule = s.store.load();
    let name = s.store.load_user_name();

    let result = compute_status(now, schedule.as_ref(), t);
    let greeting = greeting(now, t, name.as_deref());

    (
        StatusCode::OK,
        Json(json!({
            "status": result.status,
            "label": result.label,
            "greeting": greeting,
        })),
    )
        .into_response()
}
