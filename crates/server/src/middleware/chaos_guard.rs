use crate::AppState;
use crate::route::Route;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{extract::Request, extract::State, middleware::Next, response::Response};

/// Fails every request except `/chaos/stop` while chaos mode is on.
///
/// Runs before routing, so it also covers the fallback and `/chaos/start`.
pub async fn chaos_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let route = Route::from_path(request.uri().path());
    if route.is_intercepted(state.chaos.is_enabled()) {
        tracing::debug!(
            pool = %state.config.pool,
            path = %request.uri().path(),
            "Chaos mode active, simulating failure"
        );
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            state.config.pool.failure_message(),
        )
            .into_response();
    }
    next.run(request).await
}
