//! Process lifecycle: readiness notification, signal handling and logging.

pub mod logging;
pub mod notify;
pub mod signal;

/// Trait for lifecycle event notification (foreground vs systemd).
pub trait Lifecycle: Send + Sync {
    /// Called when the listener is bound and serving.
    fn on_ready(&self);
    /// Called when the server is about to stop.
    fn on_stopping(&self);
}

/// Foreground lifecycle: logs events only.
pub struct ForegroundLifecycle;

impl Lifecycle for ForegroundLifecycle {
    fn on_ready(&self) {
        tracing::info!("Service ready");
    }

    fn on_stopping(&self) {
        tracing::info!("Service stopping...");
    }
}

/// Systemd lifecycle: sends sd-notify messages and logs.
pub struct SystemdLifecycle;

impl Lifecycle for SystemdLifecycle {
    fn on_ready(&self) {
        notify::sd_ready();
        tracing::info!("Service ready (notified systemd)");
    }

    fn on_stopping(&self) {
        notify::sd_stopping();
        tracing::info!("Service stopping (notified systemd)...");
    }
}

/// Returns `SystemdLifecycle` if `NOTIFY_SOCKET` is set, else `ForegroundLifecycle`.
pub fn detect_lifecycle() -> Box<dyn Lifecycle> {
    if std::env::var_os("NOTIFY_SOCKET").is_some() {
        Box::new(SystemdLifecycle)
    } else {
        Box::new(ForegroundLifecycle)
    }
}
