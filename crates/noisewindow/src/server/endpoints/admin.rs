//! Admin endpoints other than the schedule edit itself.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::info;

/// POST /admin/verify (PIN-gated)
///
/// No-op behind the PIN middleware: reaching it at all means the PIN was
/// right. The unlock prompt uses this to open the admin panel.
pub async fn post_verify() -> Response {
    info!("POST /admin/verify");

    (StatusCode::OK, Json(json!({ "ok": true }))).into_response()
}
