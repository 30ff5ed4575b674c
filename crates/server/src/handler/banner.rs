use crate::AppState;
use axum::extract::State;

/// Fallback for every path without a dedicated route.
pub async fn banner(State(state): State<AppState>) -> String {
    state.config.pool.banner()
}
