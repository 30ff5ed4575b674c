use crate::AppState;
use axum::extract::State;

/// ANY /chaos/start: turn on fault injection for this instance.
pub async fn chaos_start(State(state): State<AppState>) -> String {
    let pool = state.config.pool;
    if !state.chaos.enable() {
        tracing::warn!(pool = %pool, "Chaos mode enabled");
    }
    pool.chaos_enabled_message()
}

/// ANY /chaos/stop: turn fault injection off again.
pub async fn chaos_stop(State(state): State<AppState>) -> String {
    let pool = state.config.pool;
    if state.chaos.disable() {
        tracing::info!(pool = %pool, "Chaos mode disabled");
    }
    pool.chaos_disabled_message()
}
