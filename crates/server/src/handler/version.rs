use crate::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use bluegreen_core::error::AppError;
use serde::{Deserialize, Serialize};

pub const X_APP_POOL: HeaderName = HeaderName::from_static("x-app-pool");
pub const X_RELEASE_ID: HeaderName = HeaderName::from_static("x-release-id");

/// Body of `/version`. Field order is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub app: String,
    pub version: String,
}

/// ANY /version: pool and release id, in both headers and body.
pub async fn version(State(state): State<AppState>) -> Result<Response, AppError> {
    let config = &state.config;
    let headers = [
        (X_APP_POOL, HeaderValue::from_static(config.pool.name())),
        (X_RELEASE_ID, HeaderValue::from_str(&config.release_id)?),
    ];
    let body = VersionInfo {
        app: config.pool.name().to_string(),
        version: config.release_id.clone(),
    };
    Ok((headers, Json(body)).into_response())
}
