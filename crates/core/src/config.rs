use crate::error::AppError;
use crate::pool::Pool;
use axum::http::HeaderValue;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SHUTDOWN_TIMEOUT: u64 = 5;

// ─── Config ────────────────────────────────────────────────────────────────

/// Immutable per-process configuration of one pool instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Identity
    pub pool: Pool,
    pub release_id: String,

    // Server
    pub host: String,
    pub port: u16,

    // Logging
    pub logging_to_file: bool,
    pub log_dir: Option<String>,

    // Seconds to wait for in-flight requests after a shutdown signal
    pub shutdown_timeout: u64,
}

impl Config {
    /// Defaults for the given pool.
    pub fn for_pool(pool: Pool) -> Self {
        Self {
            pool,
            release_id: pool.default_release_id().to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            logging_to_file: false,
            log_dir: None,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
        }
    }

    /// Override the release id. An empty value keeps the pool default; any
    /// other value is used as given.
    pub fn with_release_id(mut self, release_id: Option<&str>) -> Self {
        if let Some(id) = release_id.filter(|id| !id.is_empty()) {
            self.release_id = id.to_string();
        }
        self
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.port == 0 {
            return Err(AppError::Config("port must be between 1 and 65535".into()));
        }
        if self.host.trim().is_empty() {
            return Err(AppError::Config("host must not be empty".into()));
        }
        if self.release_id.is_empty() {
            return Err(AppError::Config("release id must not be empty".into()));
        }
        // Echoed back in X-Release-Id
        HeaderValue::from_str(&self.release_id).map_err(|_| {
            AppError::Config(format!(
                "release id {:?} is not a valid header value",
                self.release_id
            ))
        })?;
        Ok(())
    }
}
