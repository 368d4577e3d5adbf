//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{Local, NaiveDateTime};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::{ServiceTime, TimeOfDay};
use crate::planner::Planner;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/commute", get(commute))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Next options on both routes, ranked by arrival.
async fn commute(
    State(state): State<AppState>,
    Query(query): Query<CommuteQuery>,
) -> Result<Json<CommuteResponse>, AppError> {
    let reference = reference_instant(query.now.as_deref(), Local::now().naive_local())?;

    let planner = Planner::new(&state.routes, &state.config);
    let plan = planner.plan(reference);

    debug!(
        reference = %plan.reference,
        recommendations = plan.recommendations.len(),
        "commute request"
    );

    Ok(Json(CommuteResponse::from_plan(&plan)))
}

/// Resolve the request's reference instant.
///
/// An "HH:MM" override is taken as that time today; otherwise the clock is
/// used. An empty override counts as absent.
fn reference_instant(
    now_override: Option<&str>,
    clock: NaiveDateTime,
) -> Result<ServiceTime, AppError> {
    match now_override.filter(|s| !s.is_empty()) {
        Some(s) => {
            let time = TimeOfDay::parse(s).map_err(|e| AppError::BadRequest {
                message: format!("Invalid now parameter {s:?}: {e}"),
            })?;
            Ok(time.on(clock.date()))
        }
        None => Ok(ServiceTime::from_datetime(clock)),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
