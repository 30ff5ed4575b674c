pub mod handler;
pub mod middleware;
pub mod route;

use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Router, middleware as axum_mw};
use bluegreen_core::chaos::ChaosSwitch;
use bluegreen_core::config::Config;
use bluegreen_core::error::AppError;
use route::Route;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Shared state of one pool instance.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub chaos: Arc<ChaosSwitch>,
}

impl AppState {
    /// Fresh state with chaos mode off.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            chaos: Arc::new(ChaosSwitch::new()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // Methods are not enforced; every route accepts any verb
    Router::new()
        .route(Route::HEALTH_PATH, any(handler::health::healthz))
        .route(Route::VERSION_PATH, any(handler::version::version))
        .route(Route::CHAOS_START_PATH, any(handler::chaos::chaos_start))
        .route(Route::CHAOS_STOP_PATH, any(handler::chaos::chaos_stop))
        .fallback(handler::banner::banner)
        // Layers, inner → outer
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::chaos_guard::chaos_guard,
        ))
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::request_logging::request_logging_middleware,
        ))
        .layer(axum_mw::from_fn(
            middleware::request_context::request_context_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_panic_becomes_generic_500() {
        let resp = panic_response(Box::new("boom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Internal Server Error");
    }
}
