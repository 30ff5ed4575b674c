use std::time::Instant;

/// Per-request context carrying metadata for logging.
/// Injected as an axum `Extension` by the request context middleware.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request identifier (UUID v4).
    pub request_id: String,
    pub start_time: Instant,
    /// Client IP address, if a proxy forwarded one.
    pub client_ip: Option<String>,
}

impl RequestContext {
    pub fn new(client_ip: Option<String>) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            start_time: Instant::now(),
            client_ip,
        }
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }
}
