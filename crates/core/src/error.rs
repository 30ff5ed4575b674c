use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Body sent for any unexpected failure while handling a request.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Real faults, as opposed to the simulated chaos failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Config(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        (self.status_code(), INTERNAL_ERROR_BODY).into_response()
    }
}

impl From<axum::http::header::InvalidHeaderValue> for AppError {
    fn from(e: axum::http::header::InvalidHeaderValue) -> Self {
        Self::Internal(format!("invalid header value: {e}"))
    }
}
