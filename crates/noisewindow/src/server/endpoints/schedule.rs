//! Schedule read and admin-edit endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;
use std::sync::Arc;
use tracing::{error, info};

use crate::schedule::{schedule_preview, ScheduleRecord};
use crate::server::types::ApiErrorType;
use crate::server::util::{resolve_language, LocaleQuery};
use crate::types::AppState;

/// GET /schedule
///
/// Returns the stored schedule record, or the built-in defaults when nothing
/// has been saved yet (or the stored payload was unreadable).
pub async fn get_schedule(State(s): State<Arc<AppState>>) -> Response {
    info!("GET /schedule");

    let record = s.store.load().unwrap_or_default();
    (StatusCode::OK, Json(record)).into_response()
}

/// GET /schedule/preview
///
/// Returns the localized preview rows (today plus upcoming days) the viewer
/// page renders under the status badge.
pub async fn get_preview(
    State(s): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
) -> Response {
    let language = resolve_language(&s, &query);
    info!("GET /schedule/preview (lang={})", language.as_str());

    let record = s.store.load().unwrap_or_default();
    let preview = schedule_preview(&record, language);
    (StatusCode::OK, Json(preview)).into_response()
}

/// PUT /admin/schedule (PIN-gated)
///
/// Replaces the whole stored record. The store validates every day before
/// writing; a validation failure persists nothing. `lastUpdated` is stamped
/// here so clients don't have to.
pub async fn put_schedule(
    State(s): State<Arc<AppState>>,
    Json(mut record): Json<ScheduleRecord>,
) -> Response {
    info!("PUT /admin/schedule");

    record.last_updated = Local::now().to_rfc3339();

    match s.store.save(&record) {
        Ok(()) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) if e.is_validation() => ApiErrorType::from((
            StatusCode::UNPROCESSABLE_ENTITY,
            "Schedule rejected",
            Some(e.to_string()),
        ))
        .into_response(),
        Err(e) => {
            error!("Failed to persist schedule: {e}");
            ApiErrorType::from((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save schedule",
                Some(e.to_string()),
            ))
            .into_response()
        }
    }
}
