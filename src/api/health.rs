use axum::{http::StatusCode, response::IntoResponse};

/// GET /healthz - Liveness probe
///
/// Returns 200 if the application is running. The planner holds no
/// state and talks to no backing services, so liveness is all there is
/// to check.
pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
