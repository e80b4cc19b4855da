//! Admin PIN gate.
//!
//! Compares the `x-admin-pin` header against the configured PIN. This is UX
//! gating for the admin panel, not an authorization system; see the known
//! limitation note in DESIGN.md.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::server::types::ApiErrorType;
use crate::types::AppState;

pub const PIN_HEADER: &str = "x-admin-pin";

/// Rejects admin requests whose PIN header is missing or wrong.
pub async fn check_pin(
    State(s): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(PIN_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(pin) if pin == s.config.admin_pin => next.run(request).await,
        Some(_) => {
            warn!("Admin request with wrong PIN rejected");
            ApiErrorType::from((StatusCode::UNAUTHORIZED, "Wrong PIN", None)).into_response()
        }
        None => ApiErrorType::from((
            StatusCode::UNAUTHORIZED,
            "Missing PIN",
            Some(format!("expected a {PIN_HEADER} header")),
        ))
        .into_response(),
    }
}
