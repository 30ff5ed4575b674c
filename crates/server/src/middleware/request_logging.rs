use crate::AppState;
use axum::extract::State;
use axum::{extract::Request, middleware::Next, response::Response};
use bluegreen_core::context::RequestContext;

/// Logs each request and its outcome with the request context.
pub async fn request_logging_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let pool = state.config.pool;
    let method = request.method().clone();
    let uri = request.uri().path().to_string();

    let ctx = request.extensions().get::<RequestContext>().cloned();
    let request_id = ctx
        .as_ref()
        .map(|c| c.request_id.clone())
        .unwrap_or_default();
    let client_ip = ctx
        .as_ref()
        .and_then(|c| c.client_ip.clone())
        .unwrap_or_else(|| "-".to_string());

    tracing::info!(
        request_id = %request_id,
        pool = %pool,
        client_ip = %client_ip,
        method = %method,
        path = %uri,
        "Request received"
    );

    let response = next.run(request).await;

    let elapsed = ctx.as_ref().map(|c| c.elapsed_ms()).unwrap_or(0);
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        tracing::warn!(
            request_id = %request_id,
            pool = %pool,
            status = status,
            elapsed_ms = elapsed,
            "Request failed"
        );
    } else {
        tracing::info!(
            request_id = %request_id,
            pool = %pool,
            status = status,
            elapsed_ms = elapsed,
            "Request completed"
        );
    }

    response
}
