//! Shutdown signal handling (SIGTERM / SIGINT).

use tokio::sync::watch;

/// Listens for OS signals and publishes shutdown on a watch channel.
pub struct SignalHandler {
    shutdown_tx: watch::Sender<bool>,
}

impl SignalHandler {
    /// Create a new signal handler and a receiver that becomes `true` on shutdown.
    pub fn new() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        (Self { shutdown_tx: tx }, rx)
    }

    /// Wait for SIGTERM or Ctrl+C, then signal shutdown.
    pub async fn run(self) {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    tokio::select! {
                        _ = tokio::signal::ctrl_c() => {
                            tracing::info!("Received SIGINT, initiating shutdown...");
                        }
                        _ = sigterm.recv() => {
                            tracing::info!("Received SIGTERM, initiating shutdown...");
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to install SIGTERM handler: {e}");
                    let _ = tokio::signal::ctrl_c().await;
                    tracing::info!("Received SIGINT, initiating shutdown...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Received Ctrl+C, initiating shutdown...");
        }

        self.shutdown();
    }

    fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}
