use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::{middleware as mw, Router};

use crate::server::endpoints::{admin, schedule, settings, status};
use crate::server::middleware::pin_validator;
use crate::types::AppState;

mod endpoints;
mod middleware;
pub mod types;
mod util;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Admin router: everything here requires the PIN header
    let admin_router = Router::new()
        .route("/verify", post(admin::post_verify))
        .route("/schedule", put(schedule::put_schedule))
        .layer(mw::from_fn_with_state(
            app_state.clone(),
            pin_validator::check_pin,
        ));

    Router::new()
        .route("/health", get(status::get_health))
        .route("/status", get(status::get_status))
        .route("/schedule", get(schedule::get_schedule))
        .route("/schedule/preview", get(schedule::get_preview))
        .route("/settings/name", get(settings::get_name).put(settings::put_name))
        .route(
            "/settings/language",
            get(settings::get_language).put(settings::put_language),
        )
        .nest("/admin", admin_router)
        .with_state(app_state)
}
