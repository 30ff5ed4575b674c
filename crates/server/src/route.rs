//! Route table and the chaos interception rule.

/// Every behavior the router can select for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    Version,
    ChaosStart,
    ChaosStop,
    /// Any other path, including `/`.
    Banner,
}

impl Route {
    pub const HEALTH_PATH: &'static str = "/healthz";
    pub const VERSION_PATH: &'static str = "/version";
    pub const CHAOS_START_PATH: &'static str = "/chaos/start";
    pub const CHAOS_STOP_PATH: &'static str = "/chaos/stop";

    /// Classify a request path. Exact match only; the query string must
    /// already be stripped.
    pub fn from_path(path: &str) -> Self {
        match path {
            Self::HEALTH_PATH => Self::Health,
            Self::VERSION_PATH => Self::Version,
            Self::CHAOS_START_PATH => Self::ChaosStart,
            Self::CHAOS_STOP_PATH => Self::ChaosStop,
            _ => Self::Banner,
        }
    }

    /// Only the stop endpoint stays reachable while chaos mode is on, so the
    /// instance can always be recovered through the API.
    pub fn bypasses_chaos(self) -> bool {
        matches!(self, Self::ChaosStop)
    }

    /// Whether a request for this route is answered with the simulated failure.
    pub fn is_intercepted(self, chaos_enabled: bool) -> bool {
        chaos_enabled && !self.bypasses_chaos()
    }
}
