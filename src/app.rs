//! Application struct that encapsulates server assembly and serving logic.

use bluegreen_core::config::Config;
use bluegreen_core::lifecycle::signal::SignalHandler;
use bluegreen_core::lifecycle::{self, Lifecycle};
use bluegreen_core::pool::Pool;
use bluegreen_server::{AppState, build_router};
use std::future::IntoFuture;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on the graceful drain, whatever the config says.
const MAX_DRAIN_SECS: u64 = 30;

pub struct Application {
    config: Arc<Config>,
    app_router: axum::Router,
    lifecycle: Box<dyn Lifecycle>,
}

impl Application {
    /// Validate the configuration and assemble the router with fresh state.
    pub fn build(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        tracing::info!(
            pool = %config.pool,
            release_id = %config.release_id,
            "Configured pool"
        );

        let state = AppState::new(config);
        let config = state.config.clone();
        let app_router = build_router(state);

        Ok(Self {
            config,
            app_router,
            lifecycle: lifecycle::detect_lifecycle(),
        })
    }

    /// Bind, serve until SIGINT/SIGTERM, then drain gracefully.
    pub async fn serve(self) -> anyhow::Result<()> {
        let Self {
            config,
            app_router,
            lifecycle,
        } = self;

        let (signal_handler, mut shutdown_rx) = SignalHandler::new();
        tokio::spawn(signal_handler.run());

        let addr = config.listen_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();
        announce(&mut std::io::stdout().lock(), config.pool, port)?;
        tracing::info!(pool = %config.pool, %addr, "Listening");
        lifecycle.on_ready();

        let mut drain_rx = shutdown_rx.clone();
        let shutdown = async move {
            let _ = shutdown_rx.wait_for(|v| *v).await;
        };

        let server = axum::serve(listener, app_router)
            .with_graceful_shutdown(shutdown)
            .into_future();
        tokio::pin!(server);

        let drain = Duration::from_secs(config.shutdown_timeout.min(MAX_DRAIN_SECS));
        let drain_deadline = async move {
            let _ = drain_rx.wait_for(|v| *v).await;
            tokio::time::sleep(drain).await;
        };

        tokio::select! {
            result = &mut server => result?,
            _ = drain_deadline => {
                tracing::warn!("In-flight requests still running after {}s, forcing shutdown", drain.as_secs());
            }
        }

        lifecycle.on_stopping();
        tracing::info!(pool = %config.pool, "Server shut down.");
        Ok(())
    }
}

/// Write the startup line. This is the only output the process sends to stdout.
fn announce<W: Write>(out: &mut W, pool: Pool, port: u16) -> std::io::Result<()> {
    writeln!(out, "{}", pool.startup_message(port))?;
    out.flush()
}
